//! Builders shared by the unit tests.

use crate::Type;

pub(crate) fn con(name: &str) -> Type {
    Type::constant(name)
}

pub(crate) fn var(name: &str) -> Type {
    Type::variable(name)
}

pub(crate) fn arr(types: Vec<Type>) -> Type {
    Type::array(types)
}

pub(crate) fn fun(input: Type, output: Type) -> Type {
    Type::function(input, output)
}

/// Stack cells `(a (b (c rest)))`.
pub(crate) fn stack(items: &[&str], rest: &str) -> Type {
    items
        .iter()
        .rev()
        .fold(var(rest), |tail, item| arr(vec![var(item), tail]))
}

/// `(('a 'b) -> ('a ('a 'b)))`
pub(crate) fn dup() -> Type {
    fun(stack(&["a"], "b"), stack(&["a", "a"], "b"))
}

/// `(('a ('b 'c)) -> ('b ('a 'c)))`
pub(crate) fn swap() -> Type {
    fun(stack(&["a", "b"], "c"), stack(&["b", "a"], "c"))
}

/// `(('a 'b) -> 'b)`
pub(crate) fn pop() -> Type {
    fun(stack(&["a"], "b"), var("b"))
}

/// `((('a -> 'b) 'a) -> 'b)`
pub(crate) fn apply() -> Type {
    fun(arr(vec![fun(var("a"), var("b")), var("a")]), var("b"))
}

/// `(('a 'b) -> (('c -> ('a 'c)) 'b))`
pub(crate) fn quote() -> Type {
    fun(
        stack(&["a"], "b"),
        arr(vec![fun(var("c"), stack(&["a"], "c")), var("b")]),
    )
}

/// `((('b -> 'c) (('a -> 'b) 'd)) -> (('a -> 'c) 'd))`
pub(crate) fn compose() -> Type {
    fun(
        arr(vec![
            fun(var("b"), var("c")),
            arr(vec![fun(var("a"), var("b")), var("d")]),
        ]),
        arr(vec![fun(var("a"), var("c")), var("d")]),
    )
}
