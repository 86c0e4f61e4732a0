use crate::parser::Parser;
use crate::Cursor;
use std::marker::PhantomData;

#[inline]
pub fn map_error<'a, T: Parser<'a>, E, F: Fn(T::Error) -> E>(
    parser: T,
    f: F,
) -> MapError<'a, T, E, F> {
    MapError(parser, f, PhantomData)
}

pub struct MapError<'a, T: Parser<'a>, E, F: Fn(T::Error) -> E>(T, F, PhantomData<&'a E>);

impl<'a, T: Parser<'a>, E, F: Fn(T::Error) -> E> Parser<'a> for MapError<'a, T, E, F> {
    type Attribute = T::Attribute;
    type Error = E;

    fn parse(&self, cur: Cursor<'a>) -> Result<(Self::Attribute, Cursor<'a>), Self::Error> {
        self.0.parse(cur).map_err(&self.1)
    }
}
