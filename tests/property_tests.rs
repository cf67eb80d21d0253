#[cfg(test)]
mod property_tests {
    use hestia::belief::{BeliefState, Histogram, PROBABILITY_TOLERANCE};
    use hestia::learning::q_update;
    use hestia::models::{
        BurningRoomObservation, BurningRoomTransition, ObservationModel, TransitionModel,
    };
    use hestia::table::ActionValueTable;
    use hestia::types::{Action, Observation, Preference, State};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state_strategy() -> impl Strategy<Value = State> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(fire, object_safe, agent_safe, prefers_object)| {
                let preference = if prefers_object {
                    Preference::Object
                } else {
                    Preference::Agent
                };
                State::new(fire, object_safe, agent_safe, preference)
            },
        )
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        (0usize..Action::COUNT).prop_map(|i| Action::ALL[i])
    }

    fn observation_strategy() -> impl Strategy<Value = Observation> {
        (0usize..5).prop_map(|i| Observation::all()[i])
    }

    proptest! {
        #[test]
        fn test_ask_observation_is_self_consistent(
            state in state_strategy(),
            seed in any::<u64>(),
        ) {
            let model = BurningRoomObservation::new();
            let mut rng = StdRng::seed_from_u64(seed);
            let observation = model.sample(&state, Action::Ask, &mut rng);
            prop_assert_eq!(model.probability(&observation, &state, Action::Ask), 1.0);
        }

        #[test]
        fn test_grab_likelihood_is_flat(
            state in state_strategy(),
            observation in observation_strategy(),
            long in any::<bool>()
        ) {
            let model = BurningRoomObservation::new();
            let action = if long { Action::LongGrab } else { Action::ShortGrab };
            prop_assert_eq!(model.probability(&observation, &state, action), 0.5);
        }

        #[test]
        fn test_sampled_transition_has_positive_likelihood(
            state in state_strategy(),
            action in action_strategy(),
            harm in 0.0f64..=1.0,
            seed in any::<u64>()
        ) {
            let model = BurningRoomTransition::new(harm).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let next_state = model.sample(&state, action, &mut rng);
            prop_assert!(model.probability(&next_state, &state, action) > 0.0);
            // Fire and preference are never changed by acting
            prop_assert_eq!(next_state.fire, state.fire);
            prop_assert_eq!(next_state.human_preference, state.human_preference);
        }

        #[test]
        fn test_normalised_histograms_are_accepted(
            weights in prop::collection::vec(0.01f64..10.0, 1..=16)
        ) {
            let total: f64 = weights.iter().sum();
            let entries: Vec<(State, f64)> = State::all()
                .into_iter()
                .zip(weights.iter().map(|w| w / total))
                .collect();

            let belief = Histogram::new(entries).unwrap();
            let mass: f64 = belief.enumerate().iter().map(|(_, p)| p).sum();
            prop_assert!((mass - 1.0).abs() <= PROBABILITY_TOLERANCE);

            let mut rng = StdRng::seed_from_u64(0);
            let drawn = belief.sample(&mut rng);
            prop_assert!(belief.probability(&drawn) > 0.0);
        }

        #[test]
        fn test_scaled_histograms_are_rejected(
            weights in prop::collection::vec(0.01f64..10.0, 1..=16),
            scale in prop_oneof![0.1f64..0.95, 1.05f64..3.0]
        ) {
            let total: f64 = weights.iter().sum();
            let entries: Vec<(State, f64)> = State::all()
                .into_iter()
                .zip(weights.iter().map(|w| scale * w / total))
                .collect();
            prop_assert!(Histogram::new(entries).is_err());
        }

        #[test]
        fn test_zero_reward_zero_discount_shrinks(
            state in state_strategy(),
            action in action_strategy(),
            start in -100.0f64..100.0,
            alpha in 0.01f64..=1.0
        ) {
            let mut table = ActionValueTable::new();
            table.set(&state, action, start).unwrap();

            let value = q_update(&mut table, &state, action, 0.0, &state, alpha, 0.0).unwrap();
            prop_assert!((value - (1.0 - alpha) * start).abs() < 1e-9);
            prop_assert!(value.abs() <= start.abs());
        }

        #[test]
        fn test_state_text_round_trip(state in state_strategy()) {
            prop_assert_eq!(state.to_string().parse::<State>().unwrap(), state);
        }

        #[test]
        fn test_table_snapshot_round_trip(
            values in prop::collection::vec(-1e6f64..1e6, 48)
        ) {
            let mut table = ActionValueTable::new();
            for (i, state) in State::all().iter().enumerate() {
                for action in Action::ALL {
                    table.set(state, action, values[i * 3 + action.index()]).unwrap();
                }
            }

            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("q_table.json");
            table.save(&path).unwrap();
            prop_assert_eq!(ActionValueTable::load(&path).unwrap(), table);
        }
    }
}
