/// Cast an integer expression to a usize using TryInto.
///
/// Panics when the value has no `usize` representation, e.g. a negative index.
#[macro_export]
macro_rules! cast_usize {
    ($e:expr) => {{
        let Ok(u) = <_ as TryInto<usize>>::try_into($e) else {
            panic!("value does not fit in a usize")
        };
        u
    }};
}
