mod tests {
    use pov_light_engine::SelectDebounce;

    #[test]
    fn test_nine_ticks_never_fire() {
        let mut debounce = SelectDebounce::new(10);
        for tick in 0..9 {
            assert!(!debounce.tick(true), "fired at tick {tick}");
        }
        assert!(!debounce.tick(false));
    }

    #[test]
    fn test_ten_ticks_fire_exactly_once() {
        let mut debounce = SelectDebounce::new(10);
        let mut fires = 0;
        for _ in 0..50 {
            if debounce.tick(true) {
                fires += 1;
            }
        }
        assert_eq!(fires, 1);
    }

    #[test]
    fn test_no_retrigger_until_released() {
        let mut debounce = SelectDebounce::new(10);
        for _ in 0..10 {
            debounce.tick(true);
        }
        // Still held: latched out.
        assert!(!debounce.tick(true));

        // One released tick re-arms it.
        assert!(!debounce.tick(false));
        let mut fires = 0;
        for _ in 0..10 {
            if debounce.tick(true) {
                fires += 1;
            }
        }
        assert_eq!(fires, 1);
    }

    #[test]
    fn test_release_resets_partial_count() {
        let mut debounce = SelectDebounce::new(10);
        for _ in 0..9 {
            debounce.tick(true);
        }
        debounce.tick(false);
        // Counting starts over; 9 more ticks are not enough.
        for tick in 0..9 {
            assert!(!debounce.tick(true), "fired at tick {tick}");
        }
        assert!(debounce.tick(true));
    }
}
