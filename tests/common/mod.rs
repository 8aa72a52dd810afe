#![allow(dead_code)]

pub mod recording_sink;
pub mod synthetic_image;
