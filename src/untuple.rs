//! Flatteners for the left-nested pairs produced by chained
//! [`and_map`](crate::RemoteData::and_map) calls.
//!
//! Combining four values yields `(((A, B), C), D)`; `untuple4` turns that
//! back into `(A, B, C, D)`. One function per arity, up to ten elements,
//! each a pure structural remap. Rust has no overloading, so the arity is
//! spelled out in the name.

/// Identity at arity two, kept so every arity has a flattener.
pub fn untuple2<A, B>(tuple: (A, B)) -> (A, B) {
    tuple
}

/// Flatten `((A, B), C)` into `(A, B, C)`.
pub fn untuple3<A, B, C>(((a, b), c): ((A, B), C)) -> (A, B, C) {
    (a, b, c)
}

/// Flatten `(((A, B), C), D)` into `(A, B, C, D)`.
pub fn untuple4<A, B, C, D>((((a, b), c), d): (((A, B), C), D)) -> (A, B, C, D) {
    (a, b, c, d)
}

/// Flatten a depth-five nested pair into `(A, B, C, D, E)`.
pub fn untuple5<A, B, C, D, E>(
    ((((a, b), c), d), e): ((((A, B), C), D), E),
) -> (A, B, C, D, E) {
    (a, b, c, d, e)
}

/// Flatten a depth-six nested pair into `(A, B, C, D, E, F)`.
pub fn untuple6<A, B, C, D, E, F>(
    (((((a, b), c), d), e), f): (((((A, B), C), D), E), F),
) -> (A, B, C, D, E, F) {
    (a, b, c, d, e, f)
}

/// Flatten a depth-seven nested pair into `(A, B, C, D, E, F, G)`.
pub fn untuple7<A, B, C, D, E, F, G>(
    ((((((a, b), c), d), e), f), g): ((((((A, B), C), D), E), F), G),
) -> (A, B, C, D, E, F, G) {
    (a, b, c, d, e, f, g)
}

/// Flatten a depth-eight nested pair into `(A, B, C, D, E, F, G, H)`.
pub fn untuple8<A, B, C, D, E, F, G, H>(
    (((((((a, b), c), d), e), f), g), h): (((((((A, B), C), D), E), F), G), H),
) -> (A, B, C, D, E, F, G, H) {
    (a, b, c, d, e, f, g, h)
}

/// Flatten a depth-nine nested pair into `(A, B, C, D, E, F, G, H, I)`.
pub fn untuple9<A, B, C, D, E, F, G, H, I>(
    ((((((((a, b), c), d), e), f), g), h), i): ((((((((A, B), C), D), E), F), G), H), I),
) -> (A, B, C, D, E, F, G, H, I) {
    (a, b, c, d, e, f, g, h, i)
}

/// Flatten a depth-ten nested pair into `(A, B, C, D, E, F, G, H, I, J)`.
pub fn untuple10<A, B, C, D, E, F, G, H, I, J>(
    (((((((((a, b), c), d), e), f), g), h), i), j): (((((((((A, B), C), D), E), F), G), H), I), J),
) -> (A, B, C, D, E, F, G, H, I, J) {
    (a, b, c, d, e, f, g, h, i, j)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untuple_preserves_order() {
        assert_eq!(untuple2((1, 2)), (1, 2));
        assert_eq!(untuple3(((1, 2), 3)), (1, 2, 3));
        assert_eq!(untuple4((((1, 2), 3), 4)), (1, 2, 3, 4));
        assert_eq!(untuple5(((((1, 2), 3), 4), 5)), (1, 2, 3, 4, 5));
        assert_eq!(untuple6((((((1, 2), 3), 4), 5), 6)), (1, 2, 3, 4, 5, 6));
        assert_eq!(
            untuple7(((((((1, 2), 3), 4), 5), 6), 7)),
            (1, 2, 3, 4, 5, 6, 7)
        );
        assert_eq!(
            untuple8((((((((1, 2), 3), 4), 5), 6), 7), 8)),
            (1, 2, 3, 4, 5, 6, 7, 8)
        );
        assert_eq!(
            untuple9(((((((((1, 2), 3), 4), 5), 6), 7), 8), 9)),
            (1, 2, 3, 4, 5, 6, 7, 8, 9)
        );
        assert_eq!(
            untuple10((((((((((1, 2), 3), 4), 5), 6), 7), 8), 9), 10)),
            (1, 2, 3, 4, 5, 6, 7, 8, 9, 10)
        );
    }

    #[test]
    fn test_untuple_heterogeneous() {
        assert_eq!(untuple3((("a", 1), true)), ("a", 1, true));
        assert_eq!(
            untuple4(((("a", 1), true), 'z')),
            ("a", 1, true, 'z')
        );
    }

    #[test]
    fn test_untuple_matches_chained_nesting() {
        // The same shape chained and_map calls build up by hand.
        let nested = ((((("a", "b"), "c"), "d"), "e"), "f");
        assert_eq!(untuple6(nested), ("a", "b", "c", "d", "e", "f"));
    }
}
