mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_light_dashboard::effect::ModuleSignal;
    use myrtio_light_dashboard::{AnimationModule, BurstModule, Color, SourceId};

    const NO_MANA: Color = Color::new(0.52, 0.66, 1.0);
    const DURATION: Duration = Duration::from_millis(300);

    #[test]
    fn test_idle_burst_produces_nothing() {
        let mut burst = BurstModule::<6>::new(6);
        assert!(burst.advance(Instant::from_millis(0)).is_none());
        assert!(burst.poll_signal().is_none());
        assert_eq!(burst.source(), SourceId::Burst);
    }

    #[test]
    fn test_burst_fades_in_and_out() {
        let mut burst = BurstModule::<6>::new(6);
        burst.color_burst(NO_MANA, DURATION, Instant::from_millis(1000));

        let start = burst.advance(Instant::from_millis(1000)).unwrap();
        assert_eq!(start.source(), SourceId::Burst);
        assert_eq!(start.len(), 6);
        assert!(start.colors().iter().all(|c| c.val == 0.0));

        let rising = burst.advance(Instant::from_millis(1030)).unwrap();
        assert!(rising.colors().iter().all(|c| (c.val - 0.5).abs() < 1e-3));
        assert!(rising.colors().iter().all(|c| c.hue == NO_MANA.hue));

        let falling = burst.advance(Instant::from_millis(1180)).unwrap();
        assert!(falling.colors().iter().all(|c| (c.val - 0.5).abs() < 1e-3));

        assert!(burst.poll_signal().is_none());
        assert!(burst.is_active());
    }

    #[test]
    fn test_burst_completes_after_duration() {
        let mut burst = BurstModule::<6>::new(6);
        let id = burst.color_burst(NO_MANA, DURATION, Instant::from_millis(0));
        assert_eq!(burst.active_id(), Some(id));

        burst.advance(Instant::from_millis(299));
        assert!(burst.poll_signal().is_none());

        let last = burst.advance(Instant::from_millis(300)).unwrap();
        assert!(last.colors().iter().all(|c| *c == Color::BLACK));
        assert_eq!(burst.poll_signal(), Some(ModuleSignal::Completed(id)));
        assert!(burst.poll_signal().is_none());
        assert!(!burst.is_active());

        // Nothing more once done
        assert!(burst.advance(Instant::from_millis(330)).is_none());
    }

    #[test]
    fn test_new_burst_supersedes_running_one() {
        let mut burst = BurstModule::<6>::new(6);
        let first = burst.color_burst(NO_MANA, DURATION, Instant::from_millis(0));
        burst.advance(Instant::from_millis(100));

        let second = burst.color_burst(NO_MANA, DURATION, Instant::from_millis(200));
        assert_ne!(first, second);

        // The first burst would have ended here
        assert!(burst.advance(Instant::from_millis(310)).is_some());
        assert!(burst.poll_signal().is_none());

        burst.advance(Instant::from_millis(500));
        assert_eq!(burst.poll_signal(), Some(ModuleSignal::Completed(second)));
    }

    #[test]
    fn test_superseding_drops_unread_completion() {
        let mut burst = BurstModule::<6>::new(6);
        burst.color_burst(NO_MANA, DURATION, Instant::from_millis(0));
        burst.advance(Instant::from_millis(300));

        // Completion not polled yet when the next burst starts
        burst.color_burst(NO_MANA, DURATION, Instant::from_millis(300));
        assert!(burst.poll_signal().is_none());
    }
}
