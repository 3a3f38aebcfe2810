//! Whitespace-token instance parser.

use crate::error::{ParseError, Result};
use crate::models::{Item, Money, Vehicle};
use std::str::SplitWhitespace;

/// Token cursor with field-aware errors.
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
        }
    }

    fn next(&mut self, field: &'static str) -> Result<&'a str> {
        self.inner
            .next()
            .ok_or_else(|| ParseError::UnexpectedEnd { field }.into())
    }

    fn next_u32(&mut self, field: &'static str) -> Result<u32> {
        let token = self.next(field)?;
        token.parse().map_err(|_| {
            ParseError::InvalidNumber {
                field,
                token: token.to_string(),
            }
            .into()
        })
    }

    fn next_money(&mut self, field: &'static str) -> Result<Money> {
        let token = self.next(field)?;
        Money::parse(token).ok_or_else(|| {
            ParseError::InvalidMoney {
                token: token.to_string(),
            }
            .into()
        })
    }
}

/// Parses a problem instance: a vehicle count followed by
/// `plate weight_cap volume_cap` records, then an item count followed by
/// `code value weight volume` records. Tokens are separated by arbitrary
/// whitespace; anything after the declared counts is ignored.
///
/// # Examples
///
/// ```
/// use u_loading::io::parse_instance;
///
/// let input = "\
/// 1
/// ABC1D23 50 100
/// 2
/// ITEM01 49.99 2 1
/// ITEM02 100.00 49 10
/// ";
/// let (vehicles, items) = parse_instance(input).unwrap();
/// assert_eq!(vehicles.len(), 1);
/// assert_eq!(vehicles[0].plate(), "ABC1D23");
/// assert_eq!(items[1].weight(), 49);
/// ```
pub fn parse_instance(input: &str) -> Result<(Vec<Vehicle>, Vec<Item>)> {
    let mut tokens = Tokens::new(input);

    let num_vehicles = tokens.next_u32("vehicle count")?;
    let mut vehicles = Vec::with_capacity(num_vehicles as usize);
    for _ in 0..num_vehicles {
        let plate = tokens.next("vehicle plate")?;
        let weight_cap = tokens.next_u32("vehicle weight capacity")?;
        let volume_cap = tokens.next_u32("vehicle volume capacity")?;
        vehicles.push(Vehicle::new(plate, weight_cap, volume_cap));
    }

    let num_items = tokens.next_u32("item count")?;
    let mut items = Vec::with_capacity(num_items as usize);
    for _ in 0..num_items {
        let code = tokens.next("item code")?;
        let value = tokens.next_money("item value")?;
        let weight = tokens.next_u32("item weight")?;
        let volume = tokens.next_u32("item volume")?;
        items.push(Item::new(code, value, weight, volume));
    }

    Ok((vehicles, items))
}
