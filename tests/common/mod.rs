#![allow(dead_code)]

use doodle_store::entity::factory;
use doodle_store::{Entity, Style};
use egui::{pos2, vec2, Color32, Rect};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A 1x1 rectangle whose hash code is unique per `x`
pub fn tile(x: i32) -> Entity {
    factory::rectangle(
        Rect::from_min_size(pos2(x as f32, 0.0), vec2(1.0, 1.0)),
        Style::default(),
    )
}

/// Like [`tile`], but a negative stroke width drives the hash code below zero
pub fn negative_tile(x: i32) -> Entity {
    let style = Style {
        stroke_width: -3.0,
        ..Style::default()
    };
    factory::rectangle(Rect::from_min_size(pos2(x as f32, 0.0), vec2(1.0, 1.0)), style)
}

pub fn ellipse(x: f32, y: f32, w: f32, h: f32) -> Entity {
    factory::ellipse(Rect::from_min_size(pos2(x, y), vec2(w, h)), Style::default())
}

pub fn red_line(points: &[(f32, f32)]) -> Entity {
    let style = Style {
        color: Color32::RED,
        stroke_width: 5.0,
        filled: false,
    };
    factory::line(points.iter().map(|&(x, y)| pos2(x, y)).collect(), style)
}
