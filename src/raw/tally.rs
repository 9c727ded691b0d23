use core::ops::Add;

use crate::Gender;

/// Per-gender node counts of a subtree, including its root.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Tally {
    male: usize,
    female: usize,
}

impl Tally {
    pub(crate) const ZERO: Self = Self { male: 0, female: 0 };

    /// The tally of a lone node of `gender`.
    pub(crate) const fn of(gender: Gender) -> Self {
        match gender {
            Gender::Male => Self { male: 1, female: 0 },
            Gender::Female => Self { male: 0, female: 1 },
        }
    }

    #[inline]
    pub(crate) const fn get(self, gender: Gender) -> usize {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }

    #[inline]
    pub(crate) fn increment(&mut self, gender: Gender) {
        match gender {
            Gender::Male => self.male += 1,
            Gender::Female => self.female += 1,
        }
    }

    #[cfg(test)]
    pub(crate) const fn total(self) -> usize {
        self.male + self.female
    }
}

impl Add for Tally {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            male: self.male + other.male,
            female: self.female + other.female,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lone_node_counts_only_its_gender() {
        assert_eq!(Tally::of(Gender::Male).get(Gender::Male), 1);
        assert_eq!(Tally::of(Gender::Male).get(Gender::Female), 0);
        assert_eq!(Tally::of(Gender::Female).total(), 1);
        assert_eq!(Tally::ZERO, Tally::default());
    }

    proptest! {
        #[test]
        fn increments_match_sum_of_lone_tallies(genders in prop::collection::vec(prop::bool::ANY, 0..64)) {
            let mut incremented = Tally::ZERO;
            let mut summed = Tally::ZERO;
            for is_male in genders.iter().copied() {
                let gender = if is_male { Gender::Male } else { Gender::Female };
                incremented.increment(gender);
                summed = summed + Tally::of(gender);
            }

            prop_assert_eq!(incremented, summed);
            prop_assert_eq!(incremented.total(), genders.len());
            prop_assert_eq!(incremented.get(Gender::Male), genders.iter().filter(|&&m| m).count());
        }
    }
}
