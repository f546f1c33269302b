use nullability::prelude::*;

#[derive(Debug)]
struct Foo {
    bar: Option<i32>,
    baz: Option<i32>,
}

impl Foo {
    fn update(&mut self, bar: Option<Nullable<i32>>, baz: Option<Nullable<i32>>) -> &mut Self {
        bar.apply_to(&mut self.bar);
        baz.apply_to(&mut self.baz);
        self
    }
}

fn main() -> anyhow::Result<()> {
    let mut foo = Foo { bar: Some(1), baz: Some(2) };
    println!("start: {:?}", foo);

    println!("bar={}: {:?}", Nullable::set(3), foo.update(Some(Nullable::set(3)), None));
    println!("baz={}: {:?}", null::<i32>(), foo.update(None, Some(null())));
    println!("bar=if_not_none(None): {:?}", foo.update(Nullable::if_not_none(None), None));
    println!("bar=if_not_none(4): {:?}", foo.update(Nullable::if_not_none(Some(4)), None));

    let bar = Nullable::new(foo.bar).try_into_value()?;
    println!("bar is {}", bar);
    Ok(())
}
