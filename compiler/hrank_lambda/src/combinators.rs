//! Classic terms: the SKI/BCKW combinators, Church numerals, booleans,
//! pairs and lists.

pub const COMBINATORS: &[(&str, &str)] = &[
    ("i", r"\x.x"),
    ("k", r"\x.\y.x"),
    ("s", r"\x.\y.\z.x z (y z)"),
    ("b", r"\x.\y.\z.x (y z)"),
    ("c", r"\x.\y.\z.x y z"),
    ("w", r"\x.\y.x y y"),
    ("m", r"\x.x x"),
    ("succ", r"\n.\f.\x.f (n f x)"),
    ("pred", r"\n.\f.\x.n (\g.\h.h (g f)) (\u.x) (\t.t)"),
    ("plus", r"\m.\n.\f.\x.m f (n f x)"),
    ("mul", r"\m.\n.\f.m (n f)"),
    ("zero", r"\f.\x.x"),
    ("one", r"\f.\x.f x"),
    ("two", r"\f.\x.f (f x)"),
    ("three", r"\f.\x.f (f (f x))"),
    ("true", r"\x.\y.x"),
    ("false", r"\x.\y.y"),
    ("pair", r"\x.\y.\f.f x y"),
    ("first", r"\p.p \x.\y.x"),
    ("second", r"\p.p \x.\y.y"),
    ("nil", r"\a.\x.\y.x"),
    ("null", r"\p.p (\a.\b.\x.\y.y)"),
];

/// Source of a named combinator.
pub fn combinator(name: &str) -> Option<&'static str> {
    COMBINATORS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|&(_, source)| source)
}
