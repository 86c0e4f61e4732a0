use std::convert::Infallible;
use std::marker::PhantomData;

use crate::parser::Parser;
use crate::Cursor;

/// Replace the attribute of `parser` with the text it consumed.
#[inline]
pub fn raw<'a, T: 'a + Parser<'a>>(parser: T) -> Raw<'a, T> {
    Raw(parser, PhantomData)
}

pub struct Raw<'a, T: Parser<'a>>(T, PhantomData<&'a T>);

impl<'a, T: Parser<'a>> Parser<'a> for Raw<'a, T> {
    type Attribute = &'a str;
    type Error = T::Error;

    fn parse(&self, start: Cursor<'a>) -> Result<(&'a str, Cursor<'a>), T::Error> {
        let (_, end) = self.0.parse(start)?;
        Ok(start.advance2(end.offset() - start.offset()))
    }
}

/// Zero or more repetitions. Never fails.
///
/// The attribute is the number of matches; attributes of `parser` are
/// dropped, use [`raw`] to get at the matched text.
pub fn kleene<'a, T: Parser<'a>>(parser: T) -> Kleene<T> {
    Kleene(parser)
}

pub struct Kleene<T>(T);

impl<'a, T: Parser<'a>> Parser<'a> for Kleene<T> {
    type Attribute = usize;
    type Error = Infallible;

    fn parse(&self, mut cur: Cursor<'a>) -> Result<(Self::Attribute, Cursor<'a>), Infallible> {
        let mut count = 0;
        while let Ok((_, cursor)) = self.0.parse(cur) {
            cur = cursor;
            count += 1;
        }
        Ok((count, cur))
    }
}

macro_rules! def_seq {
    ($($i:tt: $t:ident),+ $(,)?) => {
        impl<
                'a,
                $($t: Parser<'a, Error = E>),*,
                E,
            > Parser<'a> for ($($t),*,)
        {
            type Attribute = ($($t::Attribute),*,);
            type Error = E;

            #[allow(non_snake_case)]
            fn parse(&self, cur: Cursor<'a>) -> Result<(Self::Attribute, Cursor<'a>), Self::Error> {
                $(let ($t, cur) = self.$i.parse(cur)?;)*
                Ok((($($t),*,), cur))
            }
        }
    };
}

def_seq!(0: T1);
def_seq!(0: T1, 1: T2);
def_seq!(0: T1, 1: T2, 2: T3);
