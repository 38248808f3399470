//! Draw lists.
//!
//! A [`DrawList`] holds shape commands in submission order. Renderers walk
//! it sorted by [`ZIndex`], then by the order commands were pushed, so equal
//! layers keep their recording order.

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use shapes::{Border, CircleCmd, LineCmd, TextAnchor, TextCmd};
pub use z_index::ZIndex;
