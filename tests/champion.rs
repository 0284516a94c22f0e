mod tests {
    use embassy_time::Instant;
    use myrtio_light_dashboard::effect::ModuleSignal;
    use myrtio_light_dashboard::telemetry::ResourceKind;
    use myrtio_light_dashboard::{
        AbilityLoadout, AbilitySlot, AnimationModule, CastAttempt, ChampionId, ChampionModule,
        GameSnapshot, ModuleEvent, SourceId,
    };

    const LEDS: usize = 8;

    fn snapshot(mana: f32) -> GameSnapshot {
        let mut snapshot = GameSnapshot::with_health(500.0, 500.0);
        snapshot.set_champion_name("game_character_displayname_Velkoz");
        snapshot.stats.resource_kind = ResourceKind::Mana;
        snapshot.stats.resource_value = mana;
        snapshot.stats.resource_max = 400.0;
        snapshot.abilities = AbilityLoadout::new(1, 1, 0, 0);
        snapshot
    }

    fn poll(module: &mut ChampionModule) -> Option<ModuleSignal> {
        AnimationModule::<LEDS>::poll_signal(module)
    }

    #[test]
    fn test_champion_registry() {
        assert_eq!(
            ChampionId::detect("game_character_displayname_Velkoz"),
            Some(ChampionId::VelKoz)
        );
        assert_eq!(ChampionId::detect("VELKOZ"), Some(ChampionId::VelKoz));
        assert_eq!(ChampionId::detect("game_character_displayname_Ahri"), None);
        assert_eq!(ChampionId::parse_from_str("velkoz"), Some(ChampionId::VelKoz));
        assert_eq!(ChampionId::from_raw(0), Some(ChampionId::VelKoz));
        assert_eq!(ChampionId::from_raw(1), None);
        assert_eq!(ChampionId::VelKoz.as_str(), "velkoz");
    }

    #[test]
    fn test_mana_costs() {
        let id = ChampionId::VelKoz;
        assert_eq!(id.mana_cost(AbilitySlot::Q, 0), None);
        assert_eq!(id.mana_cost(AbilitySlot::Q, 1), Some(40));
        assert_eq!(id.mana_cost(AbilitySlot::W, 5), Some(70));
        assert_eq!(id.mana_cost(AbilitySlot::R, 6), Some(100));
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(AbilitySlot::from_key('q'), Some(AbilitySlot::Q));
        assert_eq!(AbilitySlot::from_key('E'), Some(AbilitySlot::E));
        assert_eq!(AbilitySlot::from_key('x'), None);
    }

    #[test]
    fn test_keys_before_first_snapshot_are_ignored() {
        let mut module = ChampionId::VelKoz.to_module();
        module.on_key_pressed('q');
        assert!(poll(&mut module).is_none());
    }

    #[test]
    fn test_cast_without_mana_raises_event() {
        let mut module = ChampionModule::new(ChampionId::VelKoz);
        AnimationModule::<LEDS>::update(&mut module, &snapshot(30.0));

        module.on_key_pressed('q');
        assert_eq!(
            poll(&mut module),
            Some(ModuleSignal::Event(ModuleEvent::OutOfMana(AbilitySlot::Q)))
        );
        assert!(poll(&mut module).is_none());
    }

    #[test]
    fn test_affordable_cast_is_reported_as_cast() {
        let mut module = ChampionModule::new(ChampionId::VelKoz);
        AnimationModule::<LEDS>::update(&mut module, &snapshot(300.0));

        module.on_key_pressed('W');
        assert_eq!(
            poll(&mut module),
            Some(ModuleSignal::Event(ModuleEvent::AbilityCast(AbilitySlot::W)))
        );
    }

    #[test]
    fn test_unlearned_ability_is_ignored() {
        let mut module = ChampionModule::new(ChampionId::VelKoz);
        AnimationModule::<LEDS>::update(&mut module, &snapshot(0.0));

        module.on_key_pressed('r');
        module.on_key_pressed('a');
        assert!(poll(&mut module).is_none());
    }

    #[test]
    fn test_non_mana_resource_never_runs_out() {
        let mut module = ChampionModule::new(ChampionId::VelKoz);
        let mut energy = snapshot(0.0);
        energy.stats.resource_kind = ResourceKind::Energy;
        AnimationModule::<LEDS>::update(&mut module, &energy);

        module.attempt_cast(AbilitySlot::Q);
        assert_eq!(
            poll(&mut module),
            Some(ModuleSignal::Event(ModuleEvent::AbilityCast(AbilitySlot::Q)))
        );
    }

    #[test]
    fn test_snapshot_cast_attempts_are_evaluated() {
        let mut module = ChampionModule::new(ChampionId::VelKoz);
        let mut update = snapshot(45.0);
        update
            .cast_attempts
            .push(CastAttempt {
                ability: AbilitySlot::W,
            })
            .unwrap();
        update
            .cast_attempts
            .push(CastAttempt {
                ability: AbilitySlot::Q,
            })
            .unwrap();
        AnimationModule::<LEDS>::update(&mut module, &update);

        assert_eq!(
            poll(&mut module),
            Some(ModuleSignal::Event(ModuleEvent::OutOfMana(AbilitySlot::W)))
        );
        assert_eq!(
            poll(&mut module),
            Some(ModuleSignal::Event(ModuleEvent::AbilityCast(AbilitySlot::Q)))
        );
    }

    #[test]
    fn test_champion_module_renders_no_frames() {
        let mut module = ChampionModule::new(ChampionId::VelKoz);
        AnimationModule::<LEDS>::update(&mut module, &snapshot(30.0));
        assert!(AnimationModule::<LEDS>::advance(&mut module, Instant::from_millis(0)).is_none());
        assert_eq!(
            AnimationModule::<LEDS>::source(&module),
            SourceId::Champion(ChampionId::VelKoz)
        );
    }
}
