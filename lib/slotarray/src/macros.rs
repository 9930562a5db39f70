/// Create a [SlotArray](crate::SlotArray) with the given `slot => value` pairs, as with `std::vec![]`.
///
/// The capacity is inferred from context.
///
/// # Panics
///
/// * if any slot is >= the array's capacity
#[macro_export]
macro_rules! slots {
    [] => {
        $crate::SlotArray::new()
    };
    [$($slot:expr => $value:expr),+ $(,)?] => {{
        let mut res = $crate::SlotArray::new();
        $(res.set($slot, $value);)+
        res
    }};
}
