//! Variable timestep update
//!
//! One call advances a running session by the elapsed frame time. Order per
//! tick: move every object, resolve catches, drop objects past the bottom
//! edge, then let the spawner add new ones at the top.

use super::collision::take_caught;
use super::state::{GameEvent, GameSession};

/// Advance a playing session by `dt_ms`, returning what happened
pub fn tick(session: &mut GameSession, dt_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !session.is_playing() {
        return events;
    }
    let dt_ms = dt_ms.max(0.0);
    session.time_ms += f64::from(dt_ms);

    for faller in &mut session.fallers {
        faller.advance(dt_ms);
    }

    if let Some(basket) = session.basket.as_ref() {
        let caught = take_caught(basket, &mut session.fallers);
        for faller in &caught {
            let event = session.apply_catch(faller);
            log::debug!("Caught {} #{}: {:?}", faller.kind.as_str(), faller.id, event);
            events.push(event);
        }
    }

    let height = session.layout.viewport.height;
    session.fallers.retain(|f| {
        if f.is_offscreen(height) {
            events.push(GameEvent::Missed {
                id: f.id,
                kind: f.kind,
            });
            false
        } else {
            true
        }
    });

    let due = session.spawner.advance(dt_ms);
    for _ in 0..due {
        events.push(session.spawn_faller());
    }

    events
}

/// End the run if the player is out of lives
pub fn check_game_over(session: &mut GameSession) -> Option<GameEvent> {
    if session.is_playing() && session.is_out_of_lives() {
        session.end();
        Some(GameEvent::GameOver {
            score: session.score,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;
    use crate::sim::{Faller, FallerKind};
    use crate::tuning::{Tuning, Viewport};

    /// 2000x800 viewport: basket 200x100 at x=900, top edge y=700, radius 40
    fn playing() -> GameSession {
        let mut s = GameSession::new(Tuning::default(), Viewport::new(2000.0, 800.0), 12345);
        s.start(12345);
        s
    }

    fn place(s: &mut GameSession, kind: FallerKind, x: f32, y: f32, speed: f32) -> u32 {
        let id = s.next_entity_id();
        s.fallers.push(Faller::new(id, kind, x, y, 20.0, speed));
        id
    }

    #[test]
    fn test_tick_does_nothing_on_start_screen() {
        let mut s = GameSession::new(Tuning::default(), Viewport::new(2000.0, 800.0), 1);
        let events = tick(&mut s, 5000.0);
        assert!(events.is_empty());
        assert!(s.fallers.is_empty());
    }

    #[test]
    fn test_coin_caught_same_tick_it_reaches_rim() {
        let mut s = playing();
        if let Some(basket) = s.basket.as_mut() {
            basket.move_to(100.0, 2000.0);
        }
        // 10 units above the rim, speed 1/ms
        let id = place(&mut s, FallerKind::Coin, 150.0, 690.0, 1.0);

        let events = tick(&mut s, 10.0);
        assert_eq!(s.score, 1);
        assert!(events.contains(&GameEvent::CoinCaught { id, score: 1 }));
        assert!(s.fallers.iter().all(|f| f.id != id));

        // Never processed again
        tick(&mut s, 10.0);
        assert_eq!(s.score, 1);
    }

    #[test]
    fn test_bomb_costs_life() {
        let mut s = playing();
        let id = place(&mut s, FallerKind::Bomb, 1000.0, 699.0, 1.0);

        let events = tick(&mut s, 1.0);
        assert_eq!(s.lives, 2);
        assert!(events.contains(&GameEvent::BombCaught { id, lives: 2 }));
        assert_eq!(s.score, 0);
    }

    #[test]
    fn test_missed_object_removed_at_bottom() {
        let mut s = playing();
        // Far from the basket
        let id = place(&mut s, FallerKind::Coin, 100.0, 0.0, 1.0);

        let events = tick(&mut s, 800.0);
        assert!(events.contains(&GameEvent::Missed {
            id,
            kind: FallerKind::Coin
        }));
        assert!(s.fallers.is_empty());
        assert_eq!(s.score, 0);
        assert_eq!(s.lives, 3);
    }

    #[test]
    fn test_every_object_advances_once() {
        let mut s = playing();
        place(&mut s, FallerKind::Coin, 100.0, 0.0, 0.5);
        place(&mut s, FallerKind::Bomb, 300.0, 100.0, 0.25);

        tick(&mut s, 100.0);
        assert_eq!(s.fallers[0].pos.y, 50.0);
        assert_eq!(s.fallers[1].pos.y, 125.0);
    }

    #[test]
    fn test_spawner_runs_inside_tick() {
        let mut s = playing();
        let events = tick(&mut s, 999.0);
        assert!(events.is_empty());

        let events = tick(&mut s, 1.0);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::Spawned { .. }));
        assert_eq!(s.fallers.len(), 1);
        assert_eq!(s.fallers[0].pos.y, 0.0);
    }

    #[test]
    fn test_last_bomb_leads_to_game_over_check() {
        let mut s = playing();
        s.lives = 1;
        place(&mut s, FallerKind::Bomb, 1000.0, 699.0, 1.0);
        place(&mut s, FallerKind::Coin, 100.0, 10.0, 0.1);

        tick(&mut s, 1.0);
        assert_eq!(s.lives, 0);
        assert_eq!(s.phase, GamePhase::Playing);

        let event = check_game_over(&mut s);
        assert_eq!(event, Some(GameEvent::GameOver { score: 0 }));
        assert_eq!(s.phase, GamePhase::GameOver);
        assert!(s.fallers.is_empty());
        assert!(!s.spawner.is_active());

        // Once over, ticks are inert
        assert!(tick(&mut s, 5000.0).is_empty());
        assert!(s.fallers.is_empty());
    }

    #[test]
    fn test_no_game_over_with_lives_left() {
        let mut s = playing();
        assert_eq!(check_game_over(&mut s), None);
        assert_eq!(s.phase, GamePhase::Playing);
    }
}
