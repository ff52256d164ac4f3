//! Reference games built on the engine.

pub mod classic;
