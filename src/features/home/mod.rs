//! Home Feature - Greeting Card and Getting Started

pub mod controller;
pub mod page;
