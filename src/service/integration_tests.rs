//! Service-layer integration tests (full sessions)

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::game::{
        build_regular_cards, Card, DeckMode, Guess, JokerVariant, MatchTier, Rank, Rules, Suit,
        MAX_STREAK_LEVEL, MIN_STREAK_LEVEL,
    };
    use crate::service::state::{GameSession, Phase, PlayMode, SessionState};
    use crate::service::{action_mask_from_state, MemoryStore, Observation, SaveSlots, StatsBook};

    fn ace_spades() -> Guess {
        Guess::new(Rank::Ace, Suit::Spades)
    }

    /// 以指定的牌序建立已進入 Idle 的小牌組對局
    fn scripted_session(current: Card, deck: Vec<Card>, loadout: Vec<Card>) -> GameSession {
        let mut base = GameSession::with_seed(5);
        base.setup(DeckMode::Small, PlayMode::Normal);
        let state = SessionState {
            loadout,
            deck,
            current_card: Some(current),
            turn: 1,
            phase: Phase::Idle,
            ..base.snapshot()
        };
        GameSession::restore(state, Rules::default(), 5)
    }

    /// 牌組 + 棄牌堆 + 目前的牌 = 完整一般牌 + 選入的 Joker
    fn assert_cards_conserved(state: &SessionState) {
        let mut seen: Vec<Card> = state.deck.clone();
        seen.extend(state.discard_pile.iter().copied());
        seen.extend(state.current_card);

        let mut expected = build_regular_cards(state.deck_mode);
        expected.extend(state.loadout.iter().copied());

        assert_eq!(seen.len(), expected.len());
        for card in &expected {
            let want = expected.iter().filter(|c| *c == card).count();
            let got = seen.iter().filter(|c| *c == card).count();
            assert_eq!(got, want, "card {card} count mismatch");
        }
    }

    #[test]
    fn test_scripted_streak_bank_and_burn() {
        let mut session = scripted_session(
            Card::regular(Rank::Seven, Suit::Spades),
            vec![
                Card::regular(Rank::Ace, Suit::Diamonds),
                Card::regular(Rank::Ace, Suit::Spades),
                Card::regular(Rank::Six, Suit::Hearts),
                Card::regular(Rank::Eight, Suit::Clubs),
                Card::regular(Rank::Nine, Suit::Hearts),
                Card::joker(JokerVariant::Red),
            ],
            vec![Card::joker(JokerVariant::Red)],
        );

        // suit ×1
        session.guess(ace_spades());
        assert_eq!(session.state().last_result.map(|r| r.tier), Some(MatchTier::Suit));
        assert_eq!(session.state().buffer, 25);
        assert_eq!(session.state().streak_level, 2);
        assert_eq!(session.state().streak_multiplier, 2);
        session.discard();

        // rank ×2
        session.guess(ace_spades());
        assert_eq!(session.state().last_result.map(|r| r.tier), Some(MatchTier::Rank));
        assert_eq!(session.state().buffer, 125);
        assert_eq!(session.state().streak_multiplier, 4);
        session.discard();

        // exact ×4
        session.guess(ace_spades());
        assert_eq!(session.state().last_result.map(|r| r.points), Some(1000));
        assert_eq!(session.state().buffer, 1125);
        assert_eq!(session.state().streak_level, 4);
        assert_eq!(session.state().streak_multiplier, 8);
        session.discard();

        session.bank();
        assert_eq!(session.phase(), Phase::Banking);
        assert_eq!(session.state().total_score, 1125);
        assert_eq!(session.state().buffer, 0);
        assert_eq!(session.state().streak_level, 1);
        // 存分後棄掉面朝下的牌，發下一張
        session.discard();
        assert_eq!(session.phase(), Phase::Idle);

        // color ×1
        session.guess(ace_spades());
        assert_eq!(session.state().last_result.map(|r| r.tier), Some(MatchTier::Color));
        assert_eq!(session.state().buffer, 10);
        assert_eq!(session.state().streak_level, 2);
        session.discard();

        // miss
        session.guess(ace_spades());
        assert_eq!(session.state().last_result.map(|r| r.tier), Some(MatchTier::Miss));
        assert_eq!(session.state().buffer, 0);
        assert_eq!(session.state().streak_level, 1);
        assert_eq!(session.state().total_score, 1125);

        assert_eq!(session.state().history.len(), 5);
        assert_eq!(session.state().max_multiplier, 8);
        assert_eq!(session.state().tier_counts.total(), 5);
    }

    #[test]
    fn test_small_deck_one_joker_plays_37_guesses() {
        let mut session = GameSession::with_seed(2024);
        session.setup(DeckMode::Small, PlayMode::Normal);
        assert!(session.choose_loadout(&[JokerVariant::Red]));
        assert_cards_conserved(session.state());

        let mut guesses = 0;
        while session.phase() != Phase::GameOver {
            assert_eq!(session.phase(), Phase::Idle);
            session.guess(ace_spades());
            guesses += 1;
            assert_cards_conserved(session.state());
            session.discard();
            assert_cards_conserved(session.state());
            assert!(guesses <= 37);
        }

        let state = session.state();
        assert_eq!(guesses, 37);
        assert!(state.deck.is_empty());
        assert!(state.current_card.is_none());
        assert_eq!(state.buffer, 0);
        assert_eq!(state.discard_pile.len(), 37);
        assert_eq!(state.history.len(), 37);
        assert_eq!(state.guess_count, 36);
        assert_eq!(state.jokers_activated.red, 1);
        assert_eq!(session.summary().final_score, state.total_score);
    }

    #[test]
    fn test_large_deck_session_with_banking() {
        let mut session = GameSession::with_seed(77);
        session.setup(DeckMode::Large, PlayMode::Training);
        assert!(session.choose_loadout(&[JokerVariant::Black, JokerVariant::Green]));

        let mut last_total = 0;
        while session.phase() != Phase::GameOver {
            let mask = action_mask_from_state(session.state());
            if mask.bank && session.state().buffer >= 200 {
                session.bank();
            } else if mask.guess {
                session.guess(Guess::new(Rank::King, Suit::Hearts));
            }
            session.discard();
            session.tick();

            let state = session.state();
            assert!(state.total_score >= last_total);
            assert!((MIN_STREAK_LEVEL..=MAX_STREAK_LEVEL).contains(&state.streak_level));
            last_total = state.total_score;
            assert_cards_conserved(state);
        }

        let summary = session.summary();
        assert_eq!(summary.deck_mode, DeckMode::Large);
        assert_eq!(summary.guesses, session.state().tier_counts.total());
        assert!(summary.elapsed > 0);
    }

    #[test]
    fn test_session_to_stats_and_save_slots() {
        let mut session = GameSession::with_seed(9);
        session.setup(DeckMode::Small, PlayMode::Normal);
        session.choose_loadout(&[]);
        for _ in 0..5 {
            session.guess(ace_spades());
            session.discard();
        }

        let mut slots = SaveSlots::new(MemoryStore::new());
        slots.save_game(&session.snapshot()).unwrap();

        let saved = slots.load_game().unwrap().expect("saved game");
        let mut resumed = GameSession::restore(saved, Rules::default(), 10);
        let before = Observation::from_session(&resumed, None);
        assert_eq!(before.turn, 6);
        assert_eq!(before.total_score, session.state().total_score);

        resumed.end_game();
        let mut book = slots.load_stats().unwrap();
        book.record_now(&resumed.summary());
        slots.save_stats(&book).unwrap();
        slots.clear_game().unwrap();

        let loaded: StatsBook = slots.load_stats().unwrap();
        assert_eq!(loaded.games_played, 1);
        assert_eq!(loaded.high_scores.len(), 1);
        assert_eq!(loaded.total_guesses, 5);
        assert!(slots.load_game().unwrap().is_none());
    }

    fn arb_action() -> impl Strategy<Value = u8> {
        0u8..6
    }

    fn arb_guess() -> impl Strategy<Value = Guess> {
        (0usize..13, 0usize..4).prop_map(|(r, s)| Guess::new(Rank::all()[r], Suit::all()[s]))
    }

    proptest! {
        #[test]
        fn test_random_play_keeps_invariants(
            seed in any::<u64>(),
            large in any::<bool>(),
            jokers in 0usize..3,
            steps in prop::collection::vec((arb_action(), arb_guess()), 1..120),
        ) {
            let mode = if large { DeckMode::Large } else { DeckMode::Small };
            let loadout: Vec<JokerVariant> = JokerVariant::all()
                .iter()
                .copied()
                .take(jokers.min(mode.max_joker_slots()))
                .collect();

            let mut session = GameSession::with_seed(seed);
            session.setup(mode, PlayMode::Normal);
            prop_assert!(session.choose_loadout(&loadout));

            let mut last_total = 0;
            for (action, guess) in steps {
                match action {
                    0 | 1 => session.guess(guess),
                    2 => session.bank(),
                    3 => session.discard(),
                    4 => session.deal(),
                    _ => session.tick(),
                }
                let state = session.state();
                prop_assert!(state.total_score >= last_total);
                prop_assert!((MIN_STREAK_LEVEL..=MAX_STREAK_LEVEL).contains(&state.streak_level));
                prop_assert_eq!(
                    state.history.len() as u32,
                    state.guess_count + state.jokers_activated.total()
                );
                last_total = state.total_score;
                assert_cards_conserved(state);
            }

            session.end_game();
            prop_assert_eq!(session.state().buffer, 0);
            prop_assert_eq!(session.phase(), Phase::GameOver);
        }
    }
}
