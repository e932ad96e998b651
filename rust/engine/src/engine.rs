use crate::betting::{run_betting_round, Opening};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{GameState, LoggedAction, Street};
use crate::hand::{Evaluator, HandStrength, StandardEvaluator};
use crate::logger::{GameLogger, NullLogger, Winner};
use crate::player::{Facing, Player};
use crate::provider::ActionProvider;

/// Table stakes and hand parameters.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Forced contribution from every seat before the deal
    pub ante: u32,
    /// Raise unit on third and fourth street
    pub small_bet: u32,
    /// Raise unit on fifth street onward
    pub big_bet: u32,
    /// Forced opening bet; defaults to half the small bet
    pub bring_in: Option<u32>,
    /// Maximum raises per street; bounds every betting round
    pub raise_cap: u32,
    /// Deck seed for deterministic replay
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(ante: u32, small_bet: u32, big_bet: u32) -> Self {
        Self {
            ante,
            small_bet,
            big_bet,
            bring_in: None,
            raise_cap: 4,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_bring_in(mut self, amount: u32) -> Self {
        self.bring_in = Some(amount);
        self
    }

    pub fn with_raise_cap(mut self, cap: u32) -> Self {
        self.raise_cap = cap;
        self
    }

    pub fn bring_in_amount(&self) -> u32 {
        self.bring_in.unwrap_or(self.small_bet / 2)
    }
}

/// The outcome of one completed hand.
#[derive(Debug, Clone)]
pub struct HandResult {
    /// Every seat that received chips, with the amount
    pub winners: Vec<Winner>,
    /// Pot size at the moment of distribution
    pub pot: u32,
    /// False when the hand ended uncontested before showdown
    pub showdown: bool,
}

/// Picks the seat obligated to post the bring-in: the lowest first upcard
/// by rank, suit order breaking ties. The scan is stable, so equal cards
/// (impossible from one deck, but not asserted) would fall to the earliest
/// seat.
pub fn determine_bring_in(seats: &[Player]) -> Result<usize, GameError> {
    let mut lowest: Option<(Card, usize)> = None;
    for p in seats.iter().filter(|p| p.is_in_hand()) {
        let upcards = p.upcards();
        let card = *upcards
            .first()
            .ok_or(GameError::InvalidState("seat has no upcard"))?;
        match lowest {
            Some((low, _)) if card >= low => {}
            _ => lowest = Some((card, p.id())),
        }
    }
    lowest
        .map(|(_, seat)| seat)
        .ok_or(GameError::InvalidState("no active players"))
}

/// Picks the first seat to act on fourth street onward: the best visible
/// hand, evaluated over upcards only, earliest seat on a tie.
pub fn best_visible(seats: &[Player], evaluator: &dyn Evaluator) -> Result<usize, GameError> {
    let mut best: Option<(HandStrength, usize)> = None;
    for p in seats.iter().filter(|p| p.is_in_hand()) {
        let strength = evaluator.evaluate(&p.upcards());
        let better = match &best {
            Some((top, _)) => strength > *top,
            None => true,
        };
        if better {
            best = Some((strength, p.id()));
        }
    }
    best.map(|(_, seat)| seat)
        .ok_or(GameError::InvalidState("no active players"))
}

/// The street sequencer: owns the deck, the seats and their decision
/// providers, and drives a hand from antes through showdown.
///
/// # Examples
///
/// ```
/// use sevenstud_engine::engine::{Engine, GameConfig};
/// use sevenstud_engine::provider::Scripted;
///
/// let mut engine = Engine::new(GameConfig::new(5, 10, 20).with_seed(42));
/// engine.seat_player("Alice", 100, Box::new(Scripted::default()));
/// engine.seat_player("Bob", 100, Box::new(Scripted::default()));
/// engine.seat_player("Charlie", 100, Box::new(Scripted::default()));
///
/// let result = engine.play_hand().expect("hand plays out");
/// let total: u32 = engine.seats().iter().map(|p| p.stack()).sum();
/// assert_eq!(total, 300); // chips are conserved
/// assert!(!result.winners.is_empty());
/// ```
pub struct Engine {
    cfg: GameConfig,
    deck: Deck,
    seats: Vec<Player>,
    providers: Vec<Box<dyn ActionProvider>>,
    state: GameState,
    evaluator: Box<dyn Evaluator>,
    logger: Box<dyn GameLogger>,
}

impl Engine {
    pub fn new(cfg: GameConfig) -> Self {
        let seed = cfg.seed.unwrap_or(0xA1A2_A3A4);
        Self {
            deck: Deck::new_with_seed(seed),
            seats: Vec::new(),
            providers: Vec::new(),
            state: GameState::new(0),
            evaluator: Box::new(StandardEvaluator),
            logger: Box::new(NullLogger),
            cfg,
        }
    }

    /// Adds a seat at the next position. Chip stacks persist across hands;
    /// the provider is consulted whenever the seat must act.
    pub fn seat_player(&mut self, name: &str, stack: u32, provider: Box<dyn ActionProvider>) {
        let id = self.seats.len();
        self.seats.push(Player::new(id, name, stack));
        self.providers.push(provider);
    }

    pub fn set_logger(&mut self, logger: Box<dyn GameLogger>) {
        self.logger = logger;
    }

    pub fn set_evaluator(&mut self, evaluator: Box<dyn Evaluator>) {
        self.evaluator = evaluator;
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }
    pub fn seats(&self) -> &[Player] {
        &self.seats
    }
    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Plays one complete hand: antes, initial deal, bring-in, the five
    /// betting streets, and settlement. Fails without touching other hands'
    /// state; chip conservation holds on every exit path that returns `Ok`.
    pub fn play_hand(&mut self) -> Result<HandResult, GameError> {
        let n = self.seats.len();
        if !(2..=7).contains(&n) {
            return Err(GameError::InvalidState(
                "stud needs between 2 and 7 seated players",
            ));
        }
        if let Some(p) = self.seats.iter().find(|p| p.stack() == 0) {
            return Err(GameError::InsufficientChips {
                seat: p.id(),
                required: self.cfg.ante.max(1),
                available: 0,
            });
        }

        self.state.reset(n);
        for p in &mut self.seats {
            p.reset_for_new_hand();
        }
        self.deck.shuffle();
        self.logger.info("New hand starting...");

        match self.run_hand() {
            Ok(result) => Ok(result),
            Err(e) => {
                self.void_hand();
                Err(e)
            }
        }
    }

    fn run_hand(&mut self) -> Result<HandResult, GameError> {
        self.ante_up();
        self.deal_initial()?;

        let bring_in_seat = determine_bring_in(&self.seats)?;
        let level = self.cfg.bring_in_amount();
        let posted = self.seats[bring_in_seat].pay(level);
        self.state.pot_mut().pay(bring_in_seat, posted);
        self.state.record(bring_in_seat, LoggedAction::BringIn, posted);
        self.logger.info(&format!(
            "{} posts the bring-in of {}.",
            self.seats[bring_in_seat].name(),
            posted
        ));

        let mut first = self.next_in_hand(bring_in_seat);
        let mut opening = Some(Opening {
            poster: bring_in_seat,
            level,
        });

        for street in Street::ALL {
            self.state.set_street(street);
            self.logger.debug(&format!("Betting on {}.", street));
            run_betting_round(
                &self.cfg,
                &mut self.seats,
                &mut self.providers,
                &mut self.state,
                &mut *self.logger,
                first,
                opening.take(),
            )?;

            let in_hand: Vec<usize> = self
                .seats
                .iter()
                .filter(|p| p.is_in_hand())
                .map(|p| p.id())
                .collect();
            if in_hand.len() == 1 {
                return Ok(self.award_uncontested(in_hand[0]));
            }
            if let Some(next) = street.next() {
                self.deal_street(next)?;
                first = best_visible(&self.seats, &*self.evaluator)?;
            }
        }

        Ok(self.showdown())
    }

    /// An aborted hand is void: every stake goes back to its owner, so chip
    /// conservation holds across failures too.
    fn void_hand(&mut self) {
        for i in 0..self.seats.len() {
            let staked = self.state.pot().staked(i);
            self.seats[i].add_chips(staked);
        }
        self.logger.warn("Hand aborted; stakes returned.");
    }

    fn ante_up(&mut self) {
        let ante = self.cfg.ante;
        for i in 0..self.seats.len() {
            let paid = self.seats[i].pay(ante);
            self.state.pot_mut().pay(i, paid);
            self.state.record(i, LoggedAction::Ante, paid);
            self.logger.info(&format!(
                "{} pays ante of {}. Chips left: {}",
                self.seats[i].name(),
                paid,
                self.seats[i].stack()
            ));
        }
        // antes are dead money; they do not count toward third-street calls
        for p in &mut self.seats {
            p.clear_street_bet();
        }
    }

    fn deal_initial(&mut self) -> Result<(), GameError> {
        for _ in 0..2 {
            for i in 0..self.seats.len() {
                let card = self.deck.deal(1)?[0];
                self.seats[i].receive(card, Facing::Down);
                self.logger.debug(&format!(
                    "{} receives a down card: {}",
                    self.seats[i].name(),
                    card
                ));
            }
        }
        for i in 0..self.seats.len() {
            let card = self.deck.deal(1)?[0];
            self.seats[i].receive(card, Facing::Up);
            self.logger.info(&format!(
                "{} receives a card: {}",
                self.seats[i].name(),
                card
            ));
        }
        Ok(())
    }

    fn deal_street(&mut self, street: Street) -> Result<(), GameError> {
        // a new street, a fresh betting level: last street's contributions
        // no longer count toward anyone's calls
        for p in &mut self.seats {
            p.clear_street_bet();
        }
        let facing = street.deal_facing();
        for i in 0..self.seats.len() {
            if !self.seats[i].is_in_hand() {
                continue;
            }
            let card = self.deck.deal(1)?[0];
            self.seats[i].receive(card, facing);
            match facing {
                Facing::Up => self.logger.info(&format!(
                    "{} receives a card: {}",
                    self.seats[i].name(),
                    card
                )),
                Facing::Down => self.logger.debug(&format!(
                    "{} receives a down card: {}",
                    self.seats[i].name(),
                    card
                )),
            }
        }
        Ok(())
    }

    fn next_in_hand(&self, from: usize) -> usize {
        let n = self.seats.len();
        (1..=n)
            .map(|k| (from + k) % n)
            .find(|&i| self.seats[i].can_bet())
            .unwrap_or(from)
    }

    fn award_uncontested(&mut self, seat: usize) -> HandResult {
        let pot = self.state.pot().total();
        self.seats[seat].add_chips(pot);
        self.state.record(seat, LoggedAction::Win, pot);
        self.logger.info(&format!(
            "{} wins the pot of {} uncontested.",
            self.seats[seat].name(),
            pot
        ));
        HandResult {
            winners: vec![Winner { seat, amount: pot }],
            pot,
            showdown: false,
        }
    }

    fn showdown(&mut self) -> HandResult {
        let strengths: Vec<Option<HandStrength>> = self
            .seats
            .iter()
            .map(|p| {
                p.is_in_hand()
                    .then(|| self.evaluator.evaluate(&p.all_cards()))
            })
            .collect();
        let pot = self.state.pot().total();
        let rewards = self.state.pot().settle(&strengths);

        let mut winners = Vec::new();
        for (seat, &amount) in rewards.iter().enumerate() {
            if amount == 0 {
                continue;
            }
            self.seats[seat].add_chips(amount);
            self.state.record(seat, LoggedAction::Win, amount);
            self.logger.info(&format!(
                "{} wins {} from the pot of {}.",
                self.seats[seat].name(),
                amount,
                pot
            ));
            winners.push(Winner { seat, amount });
        }
        HandResult {
            winners,
            pot,
            showdown: true,
        }
    }
}
