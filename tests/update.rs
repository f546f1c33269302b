use nullability::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Foo {
    bar: Option<i32>,
    baz: Option<i32>,
}

impl Foo {
    fn update(mut self, bar: Option<Nullable<i32>>, baz: Option<Nullable<i32>>) -> Self {
        bar.apply_to(&mut self.bar);
        baz.apply_to(&mut self.baz);
        self
    }
}

#[test]
fn partial_updates() {
    let foo = Foo { bar: Some(1), baz: Some(2) };

    let foo = foo.update(Some(Nullable::set(3)), None);
    assert_eq!(foo, Foo { bar: Some(3), baz: Some(2) });

    let foo = foo.update(None, Some(Nullable::new(None)));
    assert_eq!(foo, Foo { bar: Some(3), baz: None });

    let foo = foo.update(Nullable::if_not_none(None), None);
    assert_eq!(foo, Foo { bar: Some(3), baz: None });

    let foo = foo.update(Nullable::if_not_none(Some(4)), None);
    assert_eq!(foo, Foo { bar: Some(4), baz: None });
}

#[test]
fn prelude_null_clears() {
    let foo = Foo { bar: Some(1), baz: Some(2) }.update(Some(null()), Some(null()));
    assert_eq!(foo, Foo { bar: None, baz: None });
}
