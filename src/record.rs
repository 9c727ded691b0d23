//! Census records: one person per line, as `name<TAB>gender<TAB>age`.

use alloc::string::{String, ToString};
use core::num::ParseIntError;
use core::str::FromStr;

use thiserror::Error;

use crate::{Gender, OSRBTree};

/// One parsed line of a census file.
///
/// # Examples
///
/// ```
/// use osrb_tree::Gender;
/// use osrb_tree::record::Record;
///
/// let record: Record = "Grace\tF\t85".parse().unwrap();
/// assert_eq!(record.name, "Grace");
/// assert_eq!(record.gender, Gender::Female);
/// assert_eq!(record.age, 85);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    pub name: String,
    pub gender: Gender,
    pub age: u64,
}

/// Why a line could not be read as a [`Record`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseRecordError {
    #[error("missing `{field}` field")]
    MissingField { field: &'static str },

    #[error("gender must be `M` or `F`, found `{found}`")]
    InvalidGender { found: String },

    #[error("age is not a non-negative integer")]
    InvalidAge {
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for Record {
    type Err = ParseRecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut fields = line.splitn(3, '\t');
        let mut next = |field| fields.next().ok_or(ParseRecordError::MissingField { field });

        let name = next("name")?;
        let gender = next("gender")?;
        let age = next("age")?;

        let mut chars = gender.chars();
        let gender = match (chars.next().and_then(Gender::from_code), chars.next()) {
            (Some(gender), None) => gender,
            _ => {
                return Err(ParseRecordError::InvalidGender {
                    found: gender.to_string(),
                });
            }
        };
        let age = age.parse().map_err(|source| ParseRecordError::InvalidAge { source })?;

        Ok(Record {
            name: name.to_string(),
            gender,
            age,
        })
    }
}

impl Extend<Record> for OSRBTree<String, u64> {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record.name, record.gender, record.age);
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_line() {
        let record: Record = "Alan Turing\tM\t41\r".parse().unwrap();
        assert_eq!(
            record,
            Record {
                name: "Alan Turing".into(),
                gender: Gender::Male,
                age: 41
            }
        );
    }

    #[test]
    fn reports_the_first_missing_field() {
        assert_eq!("Ada".parse::<Record>(), Err(ParseRecordError::MissingField { field: "gender" }));
        assert_eq!("Ada\tF".parse::<Record>(), Err(ParseRecordError::MissingField { field: "age" }));
    }

    #[test]
    fn rejects_unknown_gender_codes() {
        for code in ["", "X", "f", "MF"] {
            let line = alloc::format!("Ada\t{code}\t36");
            assert_eq!(
                line.parse::<Record>(),
                Err(ParseRecordError::InvalidGender { found: code.into() }),
                "code {code:?}"
            );
        }
    }

    #[test]
    fn rejects_bad_ages() {
        for age in ["", "-3", "thirty", "36\textra"] {
            let line = alloc::format!("Ada\tF\t{age}");
            assert!(
                matches!(line.parse::<Record>(), Err(ParseRecordError::InvalidAge { .. })),
                "age {age:?}"
            );
        }
    }

    #[test]
    fn records_extend_a_census_tree() {
        let mut tree: OSRBTree<String, u64> = OSRBTree::new();
        tree.extend(["Bea\tF\t30", "Al\tM\t20"].into_iter().map(|line| line.parse::<Record>().unwrap()));

        let names: alloc::vec::Vec<&str> = tree.iter().map(|node| node.key().as_str()).collect();
        assert_eq!(names, ["Al", "Bea"]);
        assert_eq!(tree.count(Gender::Female), 1);
    }
}
