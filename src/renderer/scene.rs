//! Screen painting for each game phase

use super::{DrawSurface, TextAlign, palette};
use crate::sim::{FallerKind, GamePhase, GameSession};

/// Paint the current screen. `best_score` is the best run this page visit.
pub fn render(session: &GameSession, best_score: u64, surface: &mut dyn DrawSurface) {
    surface.clear();
    match session.phase {
        GamePhase::Start => start_screen(session, best_score, surface),
        GamePhase::Playing => playfield(session, surface),
        GamePhase::GameOver => game_over_screen(session, best_score, surface),
    }
}

fn start_screen(session: &GameSession, best_score: u64, surface: &mut dyn DrawSurface) {
    let layout = &session.layout;
    let cx = layout.viewport.width / 2.0;
    let h = layout.viewport.height;
    let font = layout.font_size;

    surface.draw_text(
        "Coin Catcher",
        cx,
        h * 0.3,
        font * 2.0,
        palette::TEXT,
        TextAlign::Center,
    );

    // Legend: one coin, one bomb
    let r = layout.coin_radius;
    surface.draw_circle(cx - font * 4.0, h * 0.5, r, palette::COIN);
    surface.draw_text(
        "catch",
        cx - font * 4.0,
        h * 0.5 + r * 1.5,
        font * 0.7,
        palette::DIM_TEXT,
        TextAlign::Center,
    );
    surface.draw_circle(cx + font * 4.0, h * 0.5, layout.bomb_radius, palette::BOMB);
    surface.draw_text(
        "avoid",
        cx + font * 4.0,
        h * 0.5 + r * 1.5,
        font * 0.7,
        palette::DIM_TEXT,
        TextAlign::Center,
    );

    surface.draw_text(
        "Click or tap to play",
        cx,
        h * 0.7,
        font,
        palette::TEXT,
        TextAlign::Center,
    );
    if best_score > 0 {
        surface.draw_text(
            &format!("Best: {}", best_score),
            cx,
            h * 0.8,
            font * 0.8,
            palette::DIM_TEXT,
            TextAlign::Center,
        );
    }
}

fn playfield(session: &GameSession, surface: &mut dyn DrawSurface) {
    for faller in &session.fallers {
        let color = match faller.kind {
            FallerKind::Coin => palette::COIN,
            FallerKind::Bomb => palette::BOMB,
        };
        surface.draw_circle(faller.pos.x, faller.pos.y, faller.radius, color);
    }

    if let Some(basket) = &session.basket {
        surface.draw_rect(
            basket.pos.x,
            basket.pos.y,
            basket.width,
            basket.height,
            palette::BASKET,
        );
    }

    hud(session, surface);
}

fn hud(session: &GameSession, surface: &mut dyn DrawSurface) {
    let layout = &session.layout;
    let font = layout.font_size;
    let w = layout.viewport.width;
    let y = (layout.viewport.height * 0.1).floor();

    surface.draw_text(
        &format!("Score: {}", session.score),
        (w / 2.0).floor(),
        y,
        font,
        palette::TEXT,
        TextAlign::Center,
    );
    surface.draw_text(
        &format!("Lives: {}", session.lives),
        w - font,
        y,
        font * 0.8,
        palette::TEXT,
        TextAlign::Right,
    );
}

fn game_over_screen(session: &GameSession, best_score: u64, surface: &mut dyn DrawSurface) {
    let layout = &session.layout;
    let cx = layout.viewport.width / 2.0;
    let h = layout.viewport.height;
    let font = layout.font_size;

    surface.draw_text(
        "Game Over",
        cx,
        h * 0.3,
        font * 2.0,
        palette::BOMB,
        TextAlign::Center,
    );
    surface.draw_text(
        &format!("Score: {}", session.score),
        cx,
        h * 0.45,
        font,
        palette::TEXT,
        TextAlign::Center,
    );
    if session.score > 0 && session.score >= best_score {
        surface.draw_text(
            "New best!",
            cx,
            h * 0.52,
            font * 0.8,
            palette::COIN,
            TextAlign::Center,
        );
    } else if best_score > 0 {
        surface.draw_text(
            &format!("Best: {}", best_score),
            cx,
            h * 0.52,
            font * 0.8,
            palette::DIM_TEXT,
            TextAlign::Center,
        );
    }
    surface.draw_text(
        "Click or tap to retry",
        cx,
        h * 0.7,
        font,
        palette::TEXT,
        TextAlign::Center,
    );
}
