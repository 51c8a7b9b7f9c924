//! End-to-end behaviour of the particle system through its public API.

use hanabi::prelude::*;
use hanabi::surface::Rgba8;

fn run(system: &mut ParticleSystem, frame: &mut PixelBuffer, frames: usize) {
    for _ in 0..frames {
        system.tick();
        system.render(frame);
    }
}

#[test]
fn test_launch_bursts_into_two_shells() {
    let mut system = ParticleSystem::with_seed(800, 600, 11);
    system.trigger(Fixed::from_raw(400 << 8), Fixed::from_raw(580 << 8));

    let mut ticks = 0;
    while system.particles().iter().any(|p| p.phase() == Phase::Launching) {
        system.tick();
        ticks += 1;
        assert!(ticks <= 200, "shell never burst");
    }
    assert_eq!(ticks, 200);

    let particles = system.particles();
    assert_eq!(particles.len(), 300);
    assert!(particles.iter().all(|p| p.phase() == Phase::Exploded));

    // 200 moves at -800, -796, ..., -4 raw: 80400 raw in total.
    let origin = particles[0].position();
    assert!(particles.iter().all(|p| p.position() == origin));
    assert_eq!(origin.x().to_pixel(), 400);
    assert_eq!(origin.y().raw(), (580 << 8) - 80_400);
    assert_eq!(origin.y().to_pixel(), 265);

    // The shell's own color carries into the inner ring; the outer ring gets a new one.
    let inner: Vec<_> = particles.iter().filter(|p| p.color() == 0).collect();
    assert_eq!(inner.len(), 200);
    let outer_color = particles
        .iter()
        .find(|p| p.color() != 0)
        .map(|p| p.color())
        .expect("outer ring present");
    assert_eq!(
        particles.iter().filter(|p| p.color() == outer_color).count(),
        100
    );
}

#[test]
fn test_fragment_speeds_by_shell() {
    let mut system = ParticleSystem::with_seed(800, 600, 12);
    system.trigger(Fixed::from_pixel(400), Fixed::from_pixel(580));
    for _ in 0..200 {
        system.tick();
    }

    for p in system.particles() {
        let speed = p.velocity().length();
        if p.color() == 0 {
            assert!((9.0..=301.0).contains(&speed), "inner speed {speed}");
        } else {
            assert!((299.0..=401.0).contains(&speed), "outer speed {speed}");
        }
        assert_eq!(p.gravity(), Fixed::from_raw(1));
        assert_eq!(p.health(), 200);
    }
}

#[test]
fn test_idle_sky_renders_black() {
    let mut system = ParticleSystem::with_seed(200, 100, 13);
    let mut frame = PixelBuffer::new(200, 100);
    run(&mut system, &mut frame, 30);
    assert!(system.is_idle());
    assert!(frame.is_filled_with(Rgba8::BLACK));
}

#[test]
fn test_launch_lights_up_frame() {
    let mut system = ParticleSystem::with_seed(200, 100, 14);
    let mut frame = PixelBuffer::new(200, 100);
    system.trigger(Fixed::from_pixel(100), Fixed::from_pixel(95));

    let mut lit = false;
    for _ in 0..20 {
        run(&mut system, &mut frame, 1);
        if !frame.is_filled_with(Rgba8::BLACK) {
            lit = true;
            break;
        }
    }
    assert!(lit);
}

#[test]
fn test_out_of_bounds_launch_is_culled() {
    let mut system = ParticleSystem::with_seed(800, 600, 15);
    system.trigger(Fixed::from_pixel(-5), Fixed::from_pixel(300));
    system.trigger(Fixed::from_pixel(805), Fixed::from_pixel(300));
    system.trigger(Fixed::from_pixel(400), Fixed::from_pixel(610));
    system.tick();
    assert_eq!(system.particle_count(), 0);
}

#[test]
fn test_trails_fade_within_ten_ticks() {
    let mut system = ParticleSystem::with_seed(800, 600, 16);
    let mut frame = PixelBuffer::new(800, 600);
    system.trigger(Fixed::from_pixel(400), Fixed::from_pixel(590));

    while system.trail_count() == 0 {
        run(&mut system, &mut frame, 1);
    }
    assert!(system.trails().iter().all(|t| t.color() == 0 && t.fade() == 10));

    // Without renders no new trails appear, so the existing ones run out.
    for _ in 0..9 {
        system.tick();
    }
    assert!(system.trail_count() > 0);
    assert!(system.trails().iter().all(|t| t.fade() == 1));
    system.tick();
    assert_eq!(system.trail_count(), 0);
}

#[test]
fn test_burst_decays_in_lockstep() {
    let mut system = ParticleSystem::with_seed(800, 600, 17);
    system.trigger(Fixed::from_pixel(400), Fixed::from_pixel(580));
    for _ in 0..200 {
        system.tick();
    }

    let mut last = 100;
    for _ in 0..200 {
        system.tick();
        let Some(first) = system.particles().first() else {
            break;
        };
        let decay = first.decay();
        // Fragments of one burst share a schedule.
        assert!(system.particles().iter().all(|p| p.decay() == decay));
        assert!(decay <= last);
        if first.health() >= 100 {
            assert_eq!(decay, 100);
        }
        last = decay;
    }
    assert_eq!(system.particle_count(), 0);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let mut a = ParticleSystem::with_seed(640, 480, 18);
    let mut b = ParticleSystem::with_seed(640, 480, 18);
    let mut fa = PixelBuffer::new(640, 480);
    let mut fb = PixelBuffer::new(640, 480);

    for site in [LaunchSite::Left, LaunchSite::Center, LaunchSite::Right, LaunchSite::Anywhere] {
        a.launch(site);
        b.launch(site);
    }
    run(&mut a, &mut fa, 260);
    run(&mut b, &mut fb, 260);

    assert_eq!(a.particles(), b.particles());
    assert_eq!(a.trails(), b.trails());
    assert_eq!(fa.pixels(), fb.pixels());
}

#[test]
fn test_frame_capture_writes_png() {
    let dir = std::env::temp_dir().join(format!("hanabi-capture-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("frame.png");

    let mut system = ParticleSystem::with_seed(64, 64, 19);
    let mut frame = PixelBuffer::new(64, 64);
    system.trigger(Fixed::from_pixel(32), Fixed::from_pixel(60));
    run(&mut system, &mut frame, 5);

    frame.save_png(&path).unwrap();
    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (64, 64));
    assert_eq!(decoded.as_raw().as_slice(), frame.as_bytes());

    std::fs::remove_dir_all(&dir).unwrap();
}
