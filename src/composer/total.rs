use crate::domain::Money;

use super::ProductLine;

/// Sum of `price * quantity` over `lines`, saturating at [`Money::MAX`].
pub fn compute_total(lines: &[ProductLine]) -> Money {
    lines.iter().map(ProductLine::subtotal).sum()
}
