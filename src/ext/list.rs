use std::fmt::Display;

/// Human readable enumeration of items.
pub trait PrettyList {
    /// `"Empty"`, `"a"`, `"a and b"`, `"a, b and c"`.
    fn pretty_list(&self) -> String;
}

impl<T: Display> PrettyList for [T] {
    fn pretty_list(&self) -> String {
        match self {
            [] => "Empty".to_string(),
            [only] => only.to_string(),
            [init @ .., last] => {
                let head = init.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
                format!("{head} and {last}")
            }
        }
    }
}
