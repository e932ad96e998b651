use crate::hand::HandStrength;

/// The hand's chip ledger: total collected plus per-seat staked amounts.
///
/// Tracking who staked what is what makes side pots possible — an all-in
/// seat can only win chips up to its own stake from each opponent.
#[derive(Debug, Clone)]
pub struct Pot {
    total: u32,
    staked: Vec<u32>,
}

impl Pot {
    pub fn new(seats: usize) -> Self {
        Self {
            total: 0,
            staked: vec![0; seats],
        }
    }

    pub fn pay(&mut self, seat: usize, amount: u32) {
        self.total += amount;
        self.staked[seat] += amount;
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn staked(&self, seat: usize) -> u32 {
        self.staked[seat]
    }

    pub fn reset(&mut self, seats: usize) {
        self.total = 0;
        self.staked.clear();
        self.staked.resize(seats, 0);
    }

    /// Distributes the whole pot given each seat's final strength
    /// (`None` = folded). Returns per-seat rewards summing exactly to the
    /// chips staked.
    ///
    /// Stakes are consumed in tiers, best strength first: each tier runs up
    /// to the smallest stake among its winners, is funded by every seat's
    /// chips within that range, and splits evenly with odd chips going to
    /// the earliest seat. Chips staked beyond what any surviving hand can
    /// contest (an uncalled excess) return to their owners.
    pub fn settle(&self, strengths: &[Option<HandStrength>]) -> Vec<u32> {
        let n = self.staked.len();
        debug_assert_eq!(strengths.len(), n);
        let mut rewards = vec![0u32; n];

        // Distinct strengths, best first
        let mut levels: Vec<&HandStrength> = strengths.iter().flatten().collect();
        levels.sort_unstable_by(|a, b| b.cmp(a));
        levels.dedup();

        let mut consumed = 0u32;
        for level in levels {
            loop {
                let winners: Vec<usize> = (0..n)
                    .filter(|&i| strengths[i].as_ref() == Some(level))
                    .filter(|&i| self.staked[i] > consumed)
                    .collect();
                if winners.is_empty() {
                    break;
                }
                let cap = winners.iter().map(|&i| self.staked[i]).min().unwrap();
                let pool: u32 = self
                    .staked
                    .iter()
                    .map(|&s| s.min(cap) - s.min(consumed))
                    .sum();
                let share = pool / winners.len() as u32;
                let odd = pool as usize % winners.len();
                for (k, &w) in winners.iter().enumerate() {
                    rewards[w] += share + u32::from(k < odd);
                }
                consumed = cap;
            }
        }

        // Uncalled excess above every surviving stake goes back to its owner
        for i in 0..n {
            if self.staked[i] > consumed {
                rewards[i] += self.staked[i] - consumed;
            }
        }
        rewards
    }
}
