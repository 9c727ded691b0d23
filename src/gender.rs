use core::fmt;

/// The category every node of the tree belongs to.
///
/// Ranks are counted separately per gender: [`find_with_rank`] selects the
/// k-th person *of one gender* in key order.
///
/// # Examples
///
/// ```
/// use osrb_tree::Gender;
///
/// assert_eq!(Gender::from_code('F'), Some(Gender::Female));
/// assert_eq!(Gender::Male.code(), 'M');
/// assert_eq!(Gender::Female.to_string(), "female");
/// ```
///
/// [`find_with_rank`]: crate::OSRBTree::find_with_rank
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Both genders, in declaration order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// The single-letter code used in record files and printed trees.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Gender::Male => 'M',
            Gender::Female => 'F',
        }
    }

    /// Parses a single-letter code. Only `'M'` and `'F'` are accepted.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'M' => Some(Gender::Male),
            'F' => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "male",
            Gender::Female => "female",
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for gender in Gender::ALL {
            assert_eq!(Gender::from_code(gender.code()), Some(gender));
        }
    }

    #[test]
    fn lowercase_and_unknown_codes_are_rejected() {
        assert_eq!(Gender::from_code('m'), None);
        assert_eq!(Gender::from_code('f'), None);
        assert_eq!(Gender::from_code('X'), None);
    }
}
