/// Builds a level-order slot vector, writing absent slots as `nil`.
///
/// `slots![1, nil, 3]` is `vec![Some(1), None, Some(3)]`. Any expression works as a present slot,
/// e.g. `slots![-1, i64::MAX, String::from("a")]`.
macro_rules! slots {
    (@acc [$($out:expr),*]) => {
        vec![$($out),*]
    };
    (@acc [$($out:expr),*] nil $(, $($rest:tt)*)?) => {
        slots!(@acc [$($out,)* None] $($($rest)*)?)
    };
    (@acc [$($out:expr),*] $value:expr $(, $($rest:tt)*)?) => {
        slots!(@acc [$($out,)* Some($value)] $($($rest)*)?)
    };
    ($($rest:tt)*) => {
        slots!(@acc [] $($rest)*)
    };
}


#[cfg(test)]
mod tests {
    #[test]
    fn slots_take_any_expression() {
        let ints: Vec<Option<i64>> = slots![-1, nil, i64::MAX, 2 + 3,];
        assert_eq!(ints, vec![Some(-1), None, Some(i64::MAX), Some(5)]);

        let strings = slots![String::from("b"), nil];
        assert_eq!(strings, vec![Some(String::from("b")), None]);

        let gaps: Vec<Option<i32>> = slots![nil, nil];
        assert_eq!(gaps, vec![None, None]);
    }
}
