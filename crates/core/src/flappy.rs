//! Flappy module - side-scrolling obstacle avoidance
//!
//! The bird sits at a fixed column and only moves vertically, in fixed-point
//! units of 1/[`FLAPPY_SCALE`] pixel. Pipes and coins live in fixed slot
//! arrays; leaving the screen deactivates a slot and spawning reuses the first
//! inactive one. All sizes derive from the screen size, so the same rules run
//! on any logical resolution.

use crate::rng::SimpleRng;
use crate::types::{
    Status, FLAPPY_GRAVITY, FLAPPY_JUMP, FLAPPY_SCALE, MAX_COINS, MAX_PIPES, MIN_SPAWN_TICKS,
};

/// World sizes derived from the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlappyGeometry {
    pub width: i32,
    pub height: i32,
    pub bird_size: i32,
    pub pipe_width: i32,
    pub pipe_gap: i32,
    pub pipe_speed: i32,
    pub ground_height: i32,
    pub coin_size: i32,
}

impl FlappyGeometry {
    /// Derive sizes from ratios of the screen, with minimums
    ///
    /// | Element | Ratio | Min |
    /// |---------|-------|-----|
    /// | bird | 7% of height | 8 |
    /// | pipe width | 12% of width | 20 |
    /// | pipe gap | 35% of height | |
    /// | pipe speed | 0.5% of width | 1 |
    /// | ground | 5% of height | |
    /// | coin | 3% of height | 6 |
    pub fn for_screen(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            bird_size: (height * 7 / 100).max(8),
            pipe_width: (width * 12 / 100).max(20),
            pipe_gap: height * 35 / 100,
            pipe_speed: (width * 5 / 1000).max(1),
            ground_height: height * 5 / 100,
            coin_size: (height * 3 / 100).max(6),
        }
    }

    /// Fixed column of the bird's center
    pub fn bird_x(&self) -> i32 {
        self.width / 4
    }

    pub fn bird_radius(&self) -> i32 {
        self.bird_size / 2
    }

    /// Top of the ground strip
    pub fn ground_y(&self) -> i32 {
        self.height - self.ground_height
    }

    /// Ticks between pipe spawns
    pub fn spawn_interval(&self) -> u32 {
        ((self.width / self.pipe_speed / 2).max(0) as u32).max(MIN_SPAWN_TICKS)
    }

    /// Inclusive range of gap centers
    pub fn gap_range(&self) -> (i32, i32) {
        let half = self.pipe_gap / 2;
        (
            self.ground_height + half + 20,
            self.height - self.ground_height - half - 20,
        )
    }
}

/// Pipe slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pipe {
    pub x: i32,
    /// Center of the gap.
    pub gap_y: i32,
    /// Already scored.
    pub passed: bool,
    pub active: bool,
}

/// Coin slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coin {
    /// Center.
    pub x: i32,
    pub y: i32,
    pub size: i32,
    /// Scored; no longer drawn or collidable, but still advecting.
    pub collected: bool,
    /// Slot in use.
    pub active: bool,
}

impl Coin {
    /// Drawn and collidable
    pub fn is_live(&self) -> bool {
        self.active && !self.collected
    }
}

/// Whether a bird centered at `(bird_x, bird_y)` is dead
///
/// Dead when touching the ground or the top edge, or when its horizontal
/// extent overlaps an active pipe and its vertical extent reaches either pipe
/// body outside the gap.
pub fn bird_collides(geo: &FlappyGeometry, bird_y: i32, pipes: &[Pipe]) -> bool {
    let r = geo.bird_radius();
    let bx = geo.bird_x();
    if bird_y + r >= geo.ground_y() || bird_y - r <= 0 {
        return true;
    }
    let half_gap = geo.pipe_gap / 2;
    pipes.iter().filter(|p| p.active).any(|p| {
        let overlaps_x = p.x <= bx + r && p.x + geo.pipe_width >= bx - r;
        overlaps_x && (bird_y - r <= p.gap_y - half_gap || bird_y + r >= p.gap_y + half_gap)
    })
}

/// What changed during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvents {
    pub pipes_passed: u32,
    pub coins_collected: u32,
    pub spawned_pipe: bool,
    pub died: bool,
}

/// Complete side-scroller state
#[derive(Debug, Clone)]
pub struct FlappyGame {
    geo: FlappyGeometry,
    bird_y: i32,
    velocity: i32,
    pipes: [Pipe; MAX_PIPES],
    coins: [Coin; MAX_COINS],
    score: u32,
    coin_score: u32,
    status: Status,
    ground_offset: i32,
    spawn_timer: u32,
    rng: SimpleRng,
}

impl FlappyGame {
    pub fn new(width: i32, height: i32, seed: u32) -> Self {
        let geo = FlappyGeometry::for_screen(width, height);
        Self {
            geo,
            bird_y: height * FLAPPY_SCALE / 2,
            velocity: 0,
            pipes: [Pipe {
                x: -geo.pipe_width,
                ..Pipe::default()
            }; MAX_PIPES],
            coins: [Coin {
                x: -geo.coin_size,
                ..Coin::default()
            }; MAX_COINS],
            score: 0,
            coin_score: 0,
            status: Status::Playing,
            ground_offset: 0,
            spawn_timer: 0,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn geometry(&self) -> &FlappyGeometry {
        &self.geo
    }

    /// Bird center in pixels
    pub fn bird_y(&self) -> i32 {
        self.bird_y / FLAPPY_SCALE
    }

    /// Scaled vertical velocity
    pub fn velocity(&self) -> i32 {
        self.velocity
    }

    pub fn pipes(&self) -> &[Pipe; MAX_PIPES] {
        &self.pipes
    }

    pub fn coins(&self) -> &[Coin; MAX_COINS] {
        &self.coins
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn coin_score(&self) -> u32 {
        self.coin_score
    }

    /// Displayed score: pipes passed plus coins collected
    pub fn total_score(&self) -> u32 {
        self.score + self.coin_score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn ground_offset(&self) -> i32 {
        self.ground_offset
    }

    pub fn active_pipes(&self) -> usize {
        self.pipes.iter().filter(|p| p.active).count()
    }

    pub fn active_coins(&self) -> usize {
        self.coins.iter().filter(|c| c.active).count()
    }

    pub fn jump(&mut self) {
        if self.status == Status::Playing {
            self.velocity = FLAPPY_JUMP;
        }
    }

    /// Put the bird at a pixel row with zero velocity
    pub fn place_bird(&mut self, y: i32) {
        self.bird_y = y * FLAPPY_SCALE;
        self.velocity = 0;
    }

    /// Occupy the first free pipe slot
    pub fn place_pipe(&mut self, x: i32, gap_y: i32) -> Option<usize> {
        let slot = self.pipes.iter().position(|p| !p.active)?;
        self.pipes[slot] = Pipe {
            x,
            gap_y,
            passed: false,
            active: true,
        };
        Some(slot)
    }

    /// Occupy the first free coin slot
    pub fn place_coin(&mut self, x: i32, y: i32) -> Option<usize> {
        let slot = self.coins.iter().position(|c| !c.active)?;
        self.coins[slot] = Coin {
            x,
            y,
            size: self.geo.coin_size,
            collected: false,
            active: true,
        };
        Some(slot)
    }

    /// Spawn a pipe at the right edge with a random gap, and maybe a coin in it
    pub fn spawn_pipe(&mut self) -> Option<usize> {
        if self.pipes.iter().all(|p| p.active) {
            return None;
        }
        let (lo, hi) = self.geo.gap_range();
        let gap_y = self.rng.range_inclusive(lo, hi);
        let slot = self.place_pipe(self.geo.width, gap_y)?;

        if self.rng.chance(3, 10) {
            let coin_x = self.geo.width + self.geo.pipe_width / 2;
            let coin_y = gap_y - self.geo.pipe_gap / 4
                + self.rng.next_range((self.geo.pipe_gap / 2).max(0) as u32) as i32;
            // A full coin table just skips the coin
            let _ = self.place_coin(coin_x, coin_y);
        }
        Some(slot)
    }

    /// Advance one frame of physics
    pub fn tick(&mut self) -> TickEvents {
        let mut events = TickEvents::default();
        if self.status != Status::Playing {
            return events;
        }

        self.velocity += FLAPPY_GRAVITY;
        self.bird_y += self.velocity;

        self.advect(&mut events);

        let bird_x = self.geo.bird_x();
        let r = self.geo.bird_radius();
        for p in self.pipes.iter_mut().filter(|p| p.active && !p.passed) {
            if p.x + self.geo.pipe_width < bird_x - r {
                p.passed = true;
                self.score += 1;
                events.pipes_passed += 1;
            }
        }

        let bird_y = self.bird_y();
        for c in self.coins.iter_mut().filter(|c| c.is_live()) {
            let dx = c.x - bird_x;
            let dy = c.y - bird_y;
            let reach = (self.geo.bird_size + c.size) / 3;
            if dx * dx + dy * dy <= reach * reach {
                c.collected = true;
                self.coin_score += 1;
                events.coins_collected += 1;
            }
        }

        if bird_collides(&self.geo, bird_y, &self.pipes) {
            self.status = Status::Lost;
            events.died = true;
        }
        events
    }

    fn advect(&mut self, events: &mut TickEvents) {
        let speed = self.geo.pipe_speed;
        for p in self.pipes.iter_mut().filter(|p| p.active) {
            p.x -= speed;
            if p.x + self.geo.pipe_width < 0 {
                p.active = false;
            }
        }
        for c in self.coins.iter_mut().filter(|c| c.active) {
            c.x -= speed;
            if c.x + c.size < 0 {
                c.active = false;
            }
        }

        self.ground_offset = (self.ground_offset - speed).rem_euclid(self.geo.width.max(1));

        self.spawn_timer += 1;
        if self.spawn_timer >= self.geo.spawn_interval() {
            self.spawn_timer = 0;
            events.spawned_pipe = self.spawn_pipe().is_some();
        }
    }

    pub fn exit(&mut self) {
        self.status = Status::Exited;
    }

    /// Fully re-initialize on the same screen, continuing the RNG sequence
    pub fn restart(&mut self) {
        *self = Self::new(self.geo.width, self.geo.height, self.rng.next_u32());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> FlappyGame {
        FlappyGame::new(400, 300, 11)
    }

    #[test]
    fn test_geometry_ratios_and_minimums() {
        let geo = FlappyGeometry::for_screen(400, 300);
        assert_eq!(geo.bird_size, 21);
        assert_eq!(geo.pipe_width, 48);
        assert_eq!(geo.pipe_gap, 105);
        assert_eq!(geo.pipe_speed, 2);
        assert_eq!(geo.ground_height, 15);
        assert_eq!(geo.coin_size, 9);
        assert_eq!(geo.spawn_interval(), 100);

        let tiny = FlappyGeometry::for_screen(100, 60);
        assert_eq!(tiny.bird_size, 8);
        assert_eq!(tiny.pipe_width, 20);
        assert_eq!(tiny.pipe_speed, 1);
        assert_eq!(tiny.coin_size, 6);
        assert_eq!(tiny.spawn_interval(), MIN_SPAWN_TICKS);
    }

    #[test]
    fn test_gravity_and_jump() {
        let mut g = game();
        g.tick();
        assert_eq!(g.velocity(), 50);
        assert_eq!(g.bird_y(), 150);
        g.jump();
        assert_eq!(g.velocity(), FLAPPY_JUMP);
        g.tick();
        assert_eq!(g.velocity(), -750);
        // 150.50 - 7.50
        assert_eq!(g.bird_y(), 143);
    }

    #[test]
    fn test_ground_and_ceiling_kill() {
        let geo = FlappyGeometry::for_screen(400, 300);
        let r = geo.bird_radius();
        assert!(bird_collides(&geo, geo.ground_y() - r, &[]));
        assert!(!bird_collides(&geo, geo.ground_y() - r - 1, &[]));
        assert!(bird_collides(&geo, r, &[]));
        assert!(!bird_collides(&geo, r + 1, &[]));
    }

    #[test]
    fn test_pipe_collision_outside_gap_only() {
        let geo = FlappyGeometry::for_screen(400, 300);
        let pipe = Pipe {
            x: geo.bird_x() - 5,
            gap_y: 150,
            passed: false,
            active: true,
        };
        assert!(!bird_collides(&geo, 150, &[pipe]));
        assert!(bird_collides(&geo, 150 - 52 + 10, &[pipe]));
        assert!(bird_collides(&geo, 150 + 52 - 10, &[pipe]));

        let inactive = Pipe {
            active: false,
            ..pipe
        };
        assert!(!bird_collides(&geo, 110, &[inactive]));
    }

    #[test]
    fn test_passing_pipe_scores_once() {
        let mut g = game();
        g.place_bird(150);
        let bx = g.geometry().bird_x();
        let r = g.geometry().bird_radius();
        let pw = g.geometry().pipe_width;
        // One tick of speed 2 moves it just past the bird
        g.place_pipe(bx - r - pw + 1, 150);
        let events = g.tick();
        assert_eq!(events.pipes_passed, 1);
        assert_eq!(g.score(), 1);
        g.place_bird(150);
        g.tick();
        assert_eq!(g.score(), 1);
    }

    #[test]
    fn test_coin_collected_then_released_offscreen() {
        let mut g = game();
        g.place_bird(150);
        let bx = g.geometry().bird_x();
        let slot = g.place_coin(bx + 2, 151).expect("slot");
        let events = g.tick();
        assert_eq!(events.coins_collected, 1);
        assert_eq!(g.coin_score(), 1);
        assert_eq!(g.total_score(), 1);
        assert!(g.coins()[slot].collected);
        assert!(g.coins()[slot].active);

        // Keeps advecting until it leaves the screen
        let x0 = g.coins()[slot].x;
        g.place_bird(150);
        g.tick();
        assert_eq!(g.coins()[slot].x, x0 - 2);
        for _ in 0..200 {
            g.place_bird(150);
            g.tick();
        }
        assert!(!g.coins()[slot].active);
        assert_eq!(g.coin_score(), 1);
    }

    #[test]
    fn test_pipes_spawn_on_interval_and_reuse_slots() {
        let mut g = game();
        let interval = g.geometry().spawn_interval();
        for _ in 0..interval - 1 {
            g.place_bird(150);
            assert!(!g.tick().spawned_pipe);
        }
        g.place_bird(150);
        assert!(g.tick().spawned_pipe);
        let p = g.pipes().iter().find(|p| p.active).copied().expect("pipe");
        let (lo, hi) = g.geometry().gap_range();
        assert!((lo..=hi).contains(&p.gap_y));
        assert_eq!(p.x, g.geometry().width);

        for _ in 0..MAX_PIPES {
            g.spawn_pipe();
        }
        assert_eq!(g.active_pipes(), MAX_PIPES);
        assert_eq!(g.spawn_pipe(), None);
    }

    #[test]
    fn test_ground_offset_scrolls() {
        let mut g = game();
        g.tick();
        assert_eq!(g.ground_offset(), 398);
    }

    #[test]
    fn test_death_freezes_until_restart() {
        let mut g = game();
        g.place_bird(290);
        assert!(g.tick().died);
        assert_eq!(g.status(), Status::Lost);
        let y = g.bird_y();
        g.jump();
        g.tick();
        assert_eq!(g.bird_y(), y);

        g.restart();
        assert_eq!(g.status(), Status::Playing);
        assert_eq!(g.bird_y(), 150);
        assert_eq!(g.total_score(), 0);
        assert_eq!(g.active_pipes(), 0);
    }
}
