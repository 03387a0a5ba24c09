use tracing::debug;

/// Scores a `"P/T"` string as `(P + T) * multiplier`.
///
/// Anything that does not split into exactly two sides with a number on
/// each (`"*/*"`, `""`, `"1/2/3"`) is worth 0.
#[derive(Debug, Clone, Copy)]
pub struct PtValuator {
    multiplier: u64,
}

impl PtValuator {
    pub fn new(multiplier: u64) -> Self {
        Self { multiplier }
    }

    pub fn value(&self, pt: &str) -> u64 {
        match parse_pt(pt) {
            Some((power, toughness)) => power.saturating_add(toughness).saturating_mul(self.multiplier),
            None => {
                debug!("Malformed power/toughness '{}' scored as 0", pt);
                0
            }
        }
    }
}

/// First integer on each side of the `/`.
pub fn parse_pt(pt: &str) -> Option<(u64, u64)> {
    let mut sides = pt.trim().split('/');
    let (p, t) = (sides.next()?, sides.next()?);
    if sides.next().is_some() {
        return None;
    }
    Some((first_int(p)?, first_int(t)?))
}

fn first_int(s: &str) -> Option<u64> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let digits = &s[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}
