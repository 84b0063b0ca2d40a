//! Collision response for paddles and walls
//!
//! A paddle that is moving when the ball touches it puts "English" on the
//! ball: the angle moves by one step with the sign of the paddle's movement
//! (down is positive). Since the travel vector is scaled by the ball's
//! direction, the same angle change steers the ball the other way after a
//! right-paddle hit. A still paddle (or one moving against the sign of the
//! current angle) simply mirrors the angle.

use super::state::Ball;
use crate::geometry::Rect;

/// How a paddle hit changed the ball's angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deflection {
    /// Angle nudged by the moving paddle
    English,
    /// Angle mirrored
    Rebound,
}

/// Clamp an angle to ±`max_angle` degrees
#[inline]
pub fn clamp_angle(angle: f32, max_angle: f32) -> f32 {
    angle.min(max_angle).max(-max_angle)
}

/// Sign of a value as -1, 0 or 1 (unlike `f32::signum`, zero maps to zero)
#[inline]
fn sign(value: f32) -> i32 {
    if value < 0.0 {
        -1
    } else if value > 0.0 {
        1
    } else {
        0
    }
}

/// Respond to a ball touching a paddle that moves with intent `movement`
/// (-1 up, 0 still, 1 down).
///
/// The ball always reverses its horizontal direction.
pub fn deflect_off_paddle(
    ball: &mut Ball,
    movement: i32,
    angle_step: f32,
    max_angle: f32,
) -> Deflection {
    ball.direction = -ball.direction;

    let angle_direction = sign(ball.angle);
    if movement != 0 && (angle_direction == 0 || angle_direction == movement) {
        ball.angle = clamp_angle(ball.angle + movement as f32 * angle_step, max_angle);
        Deflection::English
    } else {
        ball.angle = -ball.angle;
        Deflection::Rebound
    }
}

/// Whether a ball rect has reached the top or bottom wall
#[inline]
pub fn hits_wall(rect: &Rect, field_height: f32) -> bool {
    let edges = rect.edges();
    edges.top <= 0.0 || edges.bottom >= field_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use proptest::prelude::*;

    fn ball(angle: f32, direction: f32) -> Ball {
        let mut ball = Ball::new(&Settings::default());
        ball.angle = angle;
        ball.direction = direction;
        ball
    }

    #[test]
    fn test_still_paddle_mirrors_angle() {
        let mut b = ball(20.0, 1.0);
        assert_eq!(deflect_off_paddle(&mut b, 0, 10.0, 45.0), Deflection::Rebound);
        assert_eq!(b.angle, -20.0);
        assert_eq!(b.direction, -1.0);
    }

    #[test]
    fn test_flat_ball_picks_up_paddle_motion() {
        let mut b = ball(0.0, 1.0);
        assert_eq!(deflect_off_paddle(&mut b, 1, 10.0, 45.0), Deflection::English);
        assert_eq!(b.angle, 10.0);

        let mut b = ball(0.0, -1.0);
        deflect_off_paddle(&mut b, -1, 10.0, 45.0);
        assert_eq!(b.angle, -10.0);
        assert_eq!(b.direction, 1.0);
    }

    #[test]
    fn test_english_follows_movement_sign_not_screen_direction() {
        // Right paddle moving down, flat ball arriving from the left
        let mut b = ball(0.0, 1.0);
        deflect_off_paddle(&mut b, 1, 10.0, 45.0);
        assert_eq!(b.angle, 10.0);
        assert_eq!(b.direction, -1.0);
        // Travel is scaled by direction, so the ball heads up-left
        let v = b.velocity();
        assert!(v.x < 0.0);
        assert!(v.y < 0.0);

        // Left paddle moving down sends the ball down-right
        let mut b = ball(0.0, -1.0);
        deflect_off_paddle(&mut b, 1, 10.0, 45.0);
        let v = b.velocity();
        assert!(v.x > 0.0);
        assert!(v.y > 0.0);
    }

    #[test]
    fn test_agreeing_motion_steepens() {
        let mut b = ball(-20.0, 1.0);
        assert_eq!(deflect_off_paddle(&mut b, -1, 10.0, 45.0), Deflection::English);
        assert_eq!(b.angle, -30.0);
    }

    #[test]
    fn test_opposing_motion_mirrors() {
        let mut b = ball(20.0, -1.0);
        assert_eq!(deflect_off_paddle(&mut b, -1, 10.0, 45.0), Deflection::Rebound);
        assert_eq!(b.angle, -20.0);
        assert_eq!(b.direction, 1.0);
    }

    #[test]
    fn test_angle_clamped() {
        let mut b = ball(40.0, 1.0);
        deflect_off_paddle(&mut b, 1, 10.0, 45.0);
        assert_eq!(b.angle, 45.0);

        let mut b = ball(-45.0, 1.0);
        deflect_off_paddle(&mut b, -1, 10.0, 45.0);
        assert_eq!(b.angle, -45.0);
    }

    #[test]
    fn test_hits_wall() {
        assert!(hits_wall(&Rect::new(100.0, 0.0, 20.0, 20.0), 600.0));
        assert!(hits_wall(&Rect::new(100.0, -3.0, 20.0, 20.0), 600.0));
        assert!(hits_wall(&Rect::new(100.0, 580.0, 20.0, 20.0), 600.0));
        assert!(!hits_wall(&Rect::new(100.0, 1.0, 20.0, 20.0), 600.0));
        assert!(!hits_wall(&Rect::new(100.0, 579.0, 20.0, 20.0), 600.0));
    }

    proptest! {
        #[test]
        fn paddle_hit_reverses_and_bounds_angle(
            angle in -45.0f32..=45.0,
            forward in any::<bool>(),
            movement in -1i32..=1,
        ) {
            let direction = if forward { 1.0 } else { -1.0 };
            let mut b = ball(angle, direction);
            deflect_off_paddle(&mut b, movement, 10.0, 45.0);
            prop_assert_eq!(b.direction, -direction);
            prop_assert!((-45.0..=45.0).contains(&b.angle));
        }
    }
}
