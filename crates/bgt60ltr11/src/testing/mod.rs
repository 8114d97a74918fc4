//! Testing infrastructure (mock bus interface and delay).

pub(crate) mod mock;

pub(crate) use mock::{BusOp, MockDelay, MockInterface};
