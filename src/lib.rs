//! 單場保齡球比賽的計分服務

pub mod game;
pub mod service;
