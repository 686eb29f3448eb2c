#[cfg(test)]
mod tests {
    use infinite_scroll::chat::composer::{
        compose_reply, draw_slip, GREETING, SUBSURFACE_WHISPERS, SURFACE_VOICE,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DRAWS: usize = 100_000;

    fn slip_rate(season: &str, seed: u64) -> f64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let hits = (0..DRAWS).filter(|_| draw_slip(season, &mut rng)).count();
        hits as f64 / DRAWS as f64
    }

    #[test]
    fn test_greetings_get_fixed_line() {
        let mut rng = StdRng::seed_from_u64(1);
        for message in ["hi", "Hello", "HEY", "  hello \n"] {
            let composed = compose_reply(message, None, &mut rng);
            assert!(composed.reply.starts_with(GREETING), "{:?}", composed.reply);
        }
    }

    #[test]
    fn test_winter_hello_scenario() {
        let mut rng = StdRng::seed_from_u64(7);
        let composed = compose_reply("Hello", Some("winter"), &mut rng);

        assert!(composed
            .reply
            .starts_with("Hello. I'm Gary. I'll guide you.\n\nIn Winter, my pace is quiet and precise."));
        assert_eq!(composed.season, "winter");
    }

    #[test]
    fn test_default_season_and_generic_line() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let composed = compose_reply("tell me about the cradle", None, &mut rng);
            assert_eq!(composed.season, "spring");

            let surface = composed.reply.split("\n\n").next().unwrap();
            assert!(SURFACE_VOICE.contains(&surface));
            assert_ne!(surface, GREETING);

            let tempo_line = composed.reply.split("\n\n").nth(1).unwrap();
            assert_eq!(tempo_line, "In Spring, my pace is warm and steady.");
        }
    }

    #[test]
    fn test_season_is_lowercased() {
        let mut rng = StdRng::seed_from_u64(3);
        let composed = compose_reply("hey", Some("WINTER"), &mut rng);
        assert_eq!(composed.season, "winter");
        assert!(composed.reply.contains("In Winter, my pace is quiet and precise."));
    }

    #[test]
    fn test_unknown_season_is_echoed_with_default_tempo() {
        let mut rng = StdRng::seed_from_u64(5);
        let composed = compose_reply("hi", Some("Monsoon"), &mut rng);
        assert_eq!(composed.season, "monsoon");
        assert!(composed.reply.contains("In Monsoon, my pace is warm and steady."));
    }

    #[test]
    fn test_empty_season_defaults_to_spring() {
        let mut rng = StdRng::seed_from_u64(6);
        let composed = compose_reply("hi", Some(""), &mut rng);
        assert_eq!(composed.season, "spring");
        assert!(composed
            .reply
            .starts_with("Hello. I'm Gary. I'll guide you.\n\nIn Spring, my pace is warm and steady."));
    }

    #[test]
    fn test_slip_appends_a_whisper() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = 0;
        for _ in 0..2_000 {
            let composed = compose_reply("anything", Some("winter"), &mut rng);
            let parts: Vec<&str> = composed.reply.split("\n\n").collect();
            if composed.slip {
                seen += 1;
                assert_eq!(parts.len(), 3);
                assert!(SUBSURFACE_WHISPERS.contains(&parts[2]));
            } else {
                assert_eq!(parts.len(), 2);
            }
        }
        assert!(seen > 0);
    }

    #[test]
    fn test_winter_slip_rate() {
        let rate = slip_rate("winter", 2024);
        assert!((rate - 0.05).abs() < 0.005, "winter slip rate {}", rate);
    }

    #[test]
    fn test_default_slip_rate() {
        for (season, seed) in [("spring", 1), ("summer", 2), ("autumn", 3), ("monsoon", 4)] {
            let rate = slip_rate(season, seed);
            assert!((rate - 0.02).abs() < 0.003, "{} slip rate {}", season, rate);
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = compose_reply("what next", Some("autumn"), &mut StdRng::seed_from_u64(99));
        let b = compose_reply("what next", Some("autumn"), &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
