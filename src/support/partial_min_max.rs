use itertools::MinMaxResult;
use itertools::MinMaxResult::{MinMax, NoElements, OneElement};
use std::cmp::Ordering;

// NaN-tolerant counterparts of the Itertools min/max helpers, incomparable
// items never replace the current extreme
pub trait PartialMinMax
where
    Self: Iterator + Sized,
{
    fn partial_minmax(mut self) -> MinMaxResult<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        let first = match self.next() {
            None => NoElements,
            Some(x) => OneElement(x),
        };
        self.fold(first, |x, y| match x {
            OneElement(a) => {
                if y < a {
                    MinMax(y, a)
                } else if y > a {
                    MinMax(a, y)
                } else {
                    OneElement(a)
                }
            }
            MinMax(a, b) => {
                if y < a {
                    MinMax(y, b)
                } else if y > b {
                    MinMax(a, y)
                } else {
                    MinMax(a, b)
                }
            }
            NoElements => unreachable!(),
        })
    }

    fn partial_minmax_copy(self) -> Option<(Self::Item, Self::Item)>
    where
        Self::Item: PartialOrd + Copy,
    {
        match self.partial_minmax() {
            NoElements => None,
            OneElement(a) => Some((a, a)),
            MinMax(a, b) => Some((a, b)),
        }
    }

    /// First item with the smallest key, `None` if empty or a comparison fails
    fn partial_min_by_key<B, F>(self, mut f: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item) -> B,
        B: PartialOrd,
    {
        let mut mapped = self.map(|x| (f(&x), x));
        let first = mapped.next();
        mapped
            .fold(first, |ox, (fy, y)| {
                let (fx, x) = ox?;
                match fx.partial_cmp(&fy)? {
                    Ordering::Less | Ordering::Equal => Some((fx, x)),
                    Ordering::Greater => Some((fy, y)),
                }
            })
            .map(|(_, x)| x)
    }
}

impl<I: Iterator> PartialMinMax for I {}

#[test]
fn test_partial_minmax_copy() {
    assert_eq!([3., 1., 2.].iter().copied().partial_minmax_copy(), Some((1., 3.)));
    assert_eq!([4.].iter().copied().partial_minmax_copy(), Some((4., 4.)));
    assert_eq!(std::iter::empty::<f32>().partial_minmax_copy(), None);
}

#[test]
fn test_partial_min_by_key() {
    let items = [(1, 5.), (2, 0.5), (3, 0.5), (4, 9.)];
    assert_eq!(items.iter().partial_min_by_key(|(_, k)| *k), Some(&(2, 0.5)));
    assert_eq!(items.iter().take(0).partial_min_by_key(|(_, k)| *k), None);
}
