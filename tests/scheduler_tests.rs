use glam::{DVec2, DVec3};
use map_nav::traits::SceneRenderer;
use map_nav::{FrameScheduler, NavHost, SchedulerConfig, ViewState};

#[derive(Debug, Default)]
struct StubRenderer {
    draws: u32,
}

impl SceneRenderer for StubRenderer {
    fn framebuffer_size(&self) -> DVec2 {
        DVec2::new(100.0, 100.0)
    }

    fn has_pending_scene_changes(&self) -> bool {
        false
    }

    fn draw(&mut self, _dt: f64) {
        self.draws += 1;
    }
}

fn drive(scheduler: &mut FrameScheduler, change: bool) -> bool {
    if change {
        scheduler.notify_changed();
    }
    let render = scheduler.has_changes();
    if render {
        scheduler.frame_rendered();
    }
    render
}

#[test]
fn test_reference_sequence_change_then_quiet() {
    // Budget 4: one change tick plus four residual ticks, then quiet
    let mut scheduler = FrameScheduler::new(SchedulerConfig {
        extra_frame_mode: true,
        extra_frame_budget: 4,
    });

    let mut observed = vec![drive(&mut scheduler, true)];
    for _ in 0..5 {
        observed.push(drive(&mut scheduler, false));
    }
    assert_eq!(observed, vec![true, true, true, true, true, false]);
}

#[test]
fn test_extra_frames_disabled_stops_immediately() {
    let mut scheduler = FrameScheduler::new(SchedulerConfig {
        extra_frame_mode: false,
        extra_frame_budget: 4,
    });

    assert!(drive(&mut scheduler, true));
    assert!(!drive(&mut scheduler, false));
}

#[test]
fn test_changes_every_tick_never_drop_a_frame() {
    let mut scheduler = FrameScheduler::new(SchedulerConfig {
        extra_frame_mode: true,
        extra_frame_budget: 4,
    });

    for _ in 0..20 {
        assert!(drive(&mut scheduler, true));
    }
}

#[test]
fn test_host_settles_after_animation_with_extra_frames() {
    let mut host = NavHost::new(SchedulerConfig {
        extra_frame_mode: true,
        extra_frame_budget: 4,
    });
    host.attach_renderer(StubRenderer::default()).unwrap();

    let mut view = ViewState::new(DVec3::new(0.0, 0.0, 1.0), DVec2::new(100.0, 100.0));
    host.animator_mut()
        .begin(&view, DVec3::new(1.0, 1.0, 1.0), 0.0, 0.0, Vec::new())
        .unwrap();

    // Tick 0 snaps the zero-duration session (a fresh change), then the
    // residual budget drains over the next four ticks
    let mut rendered = Vec::new();
    for i in 0..7 {
        let report = host.tick(i as f64, 1.0 / 60.0, &mut view).unwrap();
        rendered.push(report.rendered);
    }
    assert_eq!(
        rendered,
        vec![true, true, true, true, true, false, false],
        "snap frame plus four settle frames"
    );

    let renderer = host.detach_renderer().unwrap().unwrap();
    assert_eq!(renderer.draws, 5);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = SchedulerConfig {
        extra_frame_mode: true,
        extra_frame_budget: 7,
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: SchedulerConfig = serde_json::from_str(&json).unwrap();
    assert!(back.extra_frame_mode);
    assert_eq!(back.extra_frame_budget, 7);
}
