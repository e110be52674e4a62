//! Core element traits for matcalc.

use num_traits::PrimInt;
use std::fmt;

/// Cell type of a [`Matrix`](crate::matrix::Matrix).
///
/// Any primitive integer that can hold the random digits 1..=9 qualifies. The
/// calculator itself uses `i64`.
pub trait Cell: PrimInt + From<u8> + fmt::Display + fmt::Debug + Send + Sync + 'static {}

impl<T> Cell for T where T: PrimInt + From<u8> + fmt::Display + fmt::Debug + Send + Sync + 'static {}
