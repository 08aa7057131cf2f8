use rand::prelude::*;

use super::{stage_controller::StageController, wall::create_wall};
use crate::hand::{
    calc_round_scores, calc_win_points, has_thirteen_orphans, is_complete_sets, is_complete_size,
    possible_kongs,
};
use crate::listener::Listener;
use crate::model::*;
use crate::strategy::Strategy;

#[derive(Debug)]
enum RoundResult {
    Win(Seat, Tile), // winner and the tile that completed the hand
    Draw(DrawType),
}

// [Engine]
// drives rounds_played from 0 to rule.rounds, one deal + turn loop per round
#[derive(Debug)]
pub struct GameEngine {
    seed: u64,
    rng: rand::rngs::StdRng, // per-round wall seeds derive from here
    rule: Rule,
    ctrl: StageController,
    rounds_played: usize,
    next_dealer: Seat,
    round_result: Option<RoundResult>,
    // wall
    wall: Vec<Tile>,
    n_deal: usize,                 // draw cursor into the wall
    debug_wall: Option<Vec<Tile>>, // rigged wall for the next round, debugging/tests
}

impl GameEngine {
    pub fn new(
        seed: u64,
        rule: Rule,
        strategies: [Box<dyn Strategy>; SEAT],
        listeners: Vec<Box<dyn Listener>>,
    ) -> Self {
        let ctrl = StageController::new(strategies, listeners);
        let rng = rand::SeedableRng::seed_from_u64(seed);
        Self {
            seed,
            rng,
            rule,
            ctrl,
            rounds_played: 0,
            next_dealer: 0,
            round_result: None,
            wall: vec![],
            n_deal: 0,
            debug_wall: None,
        }
    }

    pub fn set_debug_wall(&mut self, wall: Vec<Tile>) {
        self.debug_wall = Some(wall);
    }

    pub fn run(&mut self) {
        self.do_event_begin();
        while self.rounds_played < self.rule.rounds {
            self.do_event_new();
            while self.round_result.is_none() {
                self.do_turn();
            }
            self.do_event_win_draw();
            self.rounds_played += 1;
        }
        self.do_event_end();
    }

    pub fn get_seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn get_stage(&self) -> &Stage {
        self.ctrl.get_stage()
    }

    #[inline]
    fn handle_event(&mut self, event: Event) {
        self.ctrl.handle_event(&event);
    }

    fn do_event_begin(&mut self) {
        self.handle_event(Event::begin(self.ctrl.get_names()));
    }

    fn do_event_new(&mut self) {
        self.round_result = None;
        self.wall = match self.debug_wall.take() {
            Some(w) => w,
            None => create_wall(self.rng.next_u64()),
        };
        self.n_deal = 0;

        let mut hands: [Vec<Tile>; SEAT] = Default::default();
        for s in 0..SEAT {
            hands[s] = self.draw_tiles(HAND_TILES);
        }

        let dealer = self.next_dealer;
        let wall_count = self.wall.len() - self.n_deal;
        self.handle_event(Event::new(self.rounds_played, dealer, hands, wall_count));

        // dealt bonus tiles are replaced before the first turn
        for s in 0..SEAT {
            self.resolve_bonus(s);
            if self.round_result.is_some() {
                return;
            }
        }
    }

    // one full turn: draw, resolve bonus tiles, terminal check, discard
    fn do_turn(&mut self) {
        let s = (self.get_stage().turn + 1) % SEAT;

        let t = match self.draw_tile() {
            Some(t) => t,
            None => {
                self.round_result = Some(RoundResult::Draw(DrawType::WallExhausted));
                return;
            }
        };
        self.handle_event(Event::deal(s, t, false));

        self.resolve_bonus(s);
        if self.round_result.is_some() {
            return;
        }

        // terminal check happens before the mandatory discard
        let pl = &self.get_stage().players[s];
        let winning_tile = pl.drawn;
        if self.is_terminal_hand(&pl.hand) {
            // the drawn tile completed the hand unless bonus resolution consumed it
            let wt = winning_tile.unwrap_or(t);
            self.round_result = Some(RoundResult::Win(s, wt));
            return;
        }

        if self.rule.auto_kong {
            self.do_auto_kong(s);
        }

        self.do_discard(s);

        if self.get_stage().turn_count >= self.rule.max_turns {
            self.round_result = Some(RoundResult::Draw(DrawType::TurnLimit));
        }
    }

    // move bonus tiles out of the concealed hand, drawing replacements
    // until a non-bonus tile lands or the wall exhausts mid-resolution
    fn resolve_bonus(&mut self, seat: Seat) {
        loop {
            let pl = &self.get_stage().players[seat];
            let mut bonus = None;
            for ni in 1..TNUM {
                if pl.hand[TF][ni] > 0 {
                    bonus = Some(Tile(TF, ni));
                    break;
                }
            }
            let t = match bonus {
                Some(t) => t,
                None => return,
            };

            self.handle_event(Event::bonus(seat, t));
            match self.draw_tile() {
                Some(r) => self.handle_event(Event::deal(seat, r, true)),
                None => {
                    // the seat keeps whatever concealed size results
                    self.round_result = Some(RoundResult::Draw(DrawType::WallExhausted));
                    return;
                }
            }
        }
    }

    fn is_terminal_hand(&self, hand: &TileTable) -> bool {
        if self.rule.strict_win {
            is_complete_sets(hand) || (is_complete_size(hand) && has_thirteen_orphans(hand))
        } else {
            is_complete_size(hand)
        }
    }

    fn do_auto_kong(&mut self, seat: Seat) {
        let kongs = possible_kongs(&self.get_stage().players[seat].hand);
        if let Some(&t) = kongs.first() {
            self.handle_event(Event::meld(seat, GroupType::Kong, vec![t; 4]));
        }
    }

    fn do_discard(&mut self, seat: Seat) {
        let suggestion = self.ctrl.select_discard(seat);
        let pl = &self.get_stage().players[seat];
        // fallback keeps the turn loop total: a discard always happens
        let t = match suggestion {
            Some(t) if pl.count_tile(t) > 0 => t,
            _ => match pl.first_tile() {
                Some(t) => t,
                None => return, // empty hand, nothing to discard
            },
        };
        let is_drawn = pl.drawn == Some(t);
        self.handle_event(Event::discard(seat, t, is_drawn));
    }

    fn do_event_win_draw(&mut self) {
        let mut scores = calc_round_scores(self.get_stage());
        let event = match self.round_result.take() {
            Some(RoundResult::Win(s, wt)) => {
                scores[s] = calc_win_points(self.get_stage(), s, &self.rule);
                // dealer seat advances by one on a win
                self.next_dealer = (self.get_stage().dealer + 1) % SEAT;
                Event::win(s, wt, scores[s], scores)
            }
            Some(RoundResult::Draw(dt)) => Event::draw(dt, scores),
            None => unreachable!("round concluded without a result"),
        };
        self.handle_event(event);
    }

    fn do_event_end(&mut self) {
        let stg = self.get_stage();
        let scores = stg.get_scores();
        let wins = stg.get_wins();
        // first seat holding the maximum score takes the match
        let mut winner = 0;
        for s in 1..SEAT {
            if scores[s] > scores[winner] {
                winner = s;
            }
        }
        self.handle_event(Event::end(winner, scores, wins));
    }

    fn draw_tile(&mut self) -> Option<Tile> {
        if self.n_deal >= self.wall.len() {
            return None;
        }
        let t = self.wall[self.n_deal];
        self.n_deal += 1;
        Some(t)
    }

    fn draw_tiles(&mut self, count: usize) -> Vec<Tile> {
        let c = self.n_deal;
        self.n_deal += count;
        self.wall[c..self.n_deal].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::control::string::tiles_from_string;
    use crate::strategy::create_strategy;

    fn strategies(names: [&str; SEAT]) -> [Box<dyn Strategy>; SEAT] {
        [
            create_strategy(names[0]),
            create_strategy(names[1]),
            create_strategy(names[2]),
            create_strategy(names[3]),
        ]
    }

    // serializes every event, for byte-identical replay comparison
    struct EventLog {
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Listener for EventLog {
        fn notify_event(&mut self, _stg: &Stage, event: &Event) {
            self.log
                .lock()
                .unwrap()
                .push(serde_json::to_string(event).unwrap());
        }
    }

    // records how rounds concluded
    struct ResultLog {
        results: Arc<Mutex<Vec<Event>>>,
    }

    impl Listener for ResultLog {
        fn notify_event(&mut self, _stg: &Stage, event: &Event) {
            match event {
                Event::Win(_) | Event::Draw(_) => {
                    self.results.lock().unwrap().push(event.clone());
                }
                _ => {}
            }
        }
    }

    fn is_live_face(ti: Type, ni: Tnum) -> bool {
        match ti {
            TB | TC | TD => (1..TNUM).contains(&ni),
            TZ => (WE..=DW).contains(&ni),
            TF => (1..=8).contains(&ni),
            _ => false,
        }
    }

    // tile conservation: every physical copy is in exactly one container,
    // and the tile_states table agrees with the containers
    struct InvariantChecker;

    impl Listener for InvariantChecker {
        fn notify_event(&mut self, stg: &Stage, event: &Event) {
            match event {
                Event::Begin(_) | Event::End(_) => return,
                _ => {}
            }

            let (mut h, mut m, mut k, mut b, mut d, mut u) = (0, 0, 0, 0, 0, 0);
            let mut total = 0;
            for ti in 0..TYPE {
                for ni in 1..TNUM {
                    if !is_live_face(ti, ni) {
                        continue;
                    }
                    for &st in &stg.tile_states[ti][ni] {
                        total += 1;
                        match st {
                            TileState::H(_) => h += 1,
                            TileState::M(..) => m += 1,
                            TileState::K(..) => k += 1,
                            TileState::B(_) => b += 1,
                            TileState::D(_) => d += 1,
                            TileState::U => u += 1,
                        }
                    }
                }
            }

            assert_eq!(total, crate::control::wall::WALL_TILES);
            assert_eq!(u, stg.wall_count, "wall mismatch at step {}", stg.step);
            assert_eq!(d, stg.discards.len());
            let mut hands = 0;
            let mut melds = 0;
            let mut kongs = 0;
            let mut bonus = 0;
            for pl in &stg.players {
                hands += pl.count_hand();
                melds += 3 * pl.melds.len();
                kongs += 4 * pl.kongs.len();
                bonus += pl.bonus.len();
            }
            assert_eq!(h, hands);
            assert_eq!(m, melds);
            assert_eq!(k, kongs);
            assert_eq!(b, bonus);

            // hand size invariant outside the draw window
            if let Event::Discard(e) = event {
                for pl in &stg.players {
                    if pl.seat == e.seat || pl.drawn.is_none() {
                        assert_eq!(
                            pl.count_hand() + 3 * pl.melds.len() + 4 * pl.kongs.len(),
                            HAND_TILES,
                            "seat {} at step {}",
                            pl.seat,
                            stg.step,
                        );
                    }
                }
            }
        }
    }

    fn run_logged(seed: u64, rule: Rule, names: [&str; SEAT]) -> Vec<String> {
        let log = Arc::new(Mutex::new(vec![]));
        let listeners: Vec<Box<dyn Listener>> = vec![Box::new(EventLog { log: log.clone() })];
        let mut engine = GameEngine::new(seed, rule, strategies(names), listeners);
        engine.run();
        let log = log.lock().unwrap();
        log.clone()
    }

    #[test]
    fn test_determinism() {
        let names = ["Standard", "Aggressive", "Defensive", "Standard"];
        let a = run_logged(123, Rule::default(), names);
        let b = run_logged(123, Rule::default(), names);
        assert!(!a.is_empty());
        assert_eq!(a, b);

        let c = run_logged(124, Rule::default(), names);
        assert_ne!(a, c);
    }

    #[test]
    fn test_conservation() {
        let listeners: Vec<Box<dyn Listener>> = vec![Box::new(InvariantChecker {})];
        let mut engine = GameEngine::new(
            5,
            Rule::default(),
            strategies(["Standard", "Aggressive", "Defensive", "Aggressive"]),
            listeners,
        );
        engine.run();
        assert_eq!(engine.get_stage().round, engine.rule.rounds - 1);
    }

    #[test]
    fn test_conservation_with_auto_kong() {
        let rule = Rule {
            auto_kong: true,
            ..Rule::default()
        };
        let listeners: Vec<Box<dyn Listener>> = vec![Box::new(InvariantChecker {})];
        let mut engine = GameEngine::new(
            11,
            rule,
            strategies(["Standard", "Standard", "Standard", "Standard"]),
            listeners,
        );
        engine.run();
    }

    #[test]
    fn test_turn_limit_draw() {
        let rule = Rule {
            rounds: 1,
            max_turns: 10,
            ..Rule::default()
        };
        let results = Arc::new(Mutex::new(vec![]));
        let listeners: Vec<Box<dyn Listener>> = vec![Box::new(ResultLog {
            results: results.clone(),
        })];
        let mut engine = GameEngine::new(
            7,
            rule,
            strategies(["Standard", "Standard", "Standard", "Standard"]),
            listeners,
        );
        engine.run();

        let results = results.lock().unwrap();
        assert_eq!(results.len(), 1);
        match &results[0] {
            Event::Draw(e) => assert_eq!(e.draw_type, DrawType::TurnLimit),
            e => panic!("expected turn limit draw, got {:?}", e),
        }
        // a discard happened on every non-exhausted turn
        assert_eq!(engine.get_stage().turn_count, 10);
    }

    #[test]
    fn test_wall_exhaustion_draw() {
        // no turn cap: the wall runs dry and the round ends in a no-winner draw
        let rule = Rule {
            rounds: 1,
            max_turns: usize::MAX,
            ..Rule::default()
        };
        let results = Arc::new(Mutex::new(vec![]));
        let listeners: Vec<Box<dyn Listener>> = vec![
            Box::new(ResultLog {
                results: results.clone(),
            }),
            Box::new(InvariantChecker {}),
        ];
        let mut engine = GameEngine::new(
            9,
            rule,
            strategies(["Aggressive", "Aggressive", "Aggressive", "Aggressive"]),
            listeners,
        );
        engine.run();

        let results = results.lock().unwrap();
        match &results[0] {
            Event::Draw(e) => assert_eq!(e.draw_type, DrawType::WallExhausted),
            e => panic!("expected wall exhaustion, got {:?}", e),
        }
        assert_eq!(engine.get_stage().wall_count, 0);
    }

    // deals 13 fixed tiles per seat, then the listed draws
    fn rigged_wall(hands: [&str; SEAT], draws: &str) -> Vec<Tile> {
        let mut wall = vec![];
        for h in &hands {
            let tiles = tiles_from_string(h).unwrap();
            assert_eq!(tiles.len(), HAND_TILES);
            wall.extend(tiles);
        }
        wall.extend(tiles_from_string(draws).unwrap());
        wall
    }

    #[test]
    fn test_heavenly_win() {
        // the dealer's first draw completes 4 triplets + pair; a dealt bonus
        // tile is replaced first, exercising resolution mid-deal
        let wall = rigged_wall(
            [
                "b111222333444f1",
                "d123456789c2345",
                "b556677889c6789",
                "z1122334455667",
            ],
            "c1c1",
        );

        let rule = Rule {
            rounds: 1,
            ..Rule::default()
        };
        let results = Arc::new(Mutex::new(vec![]));
        let listeners: Vec<Box<dyn Listener>> = vec![Box::new(ResultLog {
            results: results.clone(),
        })];
        let mut engine = GameEngine::new(
            0,
            rule,
            strategies(["Standard", "Standard", "Standard", "Standard"]),
            listeners,
        );
        engine.set_debug_wall(wall);
        engine.run();

        let results = results.lock().unwrap();
        match &results[0] {
            Event::Win(e) => {
                assert_eq!(e.seat, 0);
                assert_eq!(e.winning_tile, Tile(TC, 1));
                // heavenly bonus plus one replaced bonus tile
                assert_eq!(e.points, 100 + 4);
            }
            e => panic!("expected a win, got {:?}", e),
        }

        let stg = engine.get_stage();
        assert_eq!(stg.players[0].score, 104);
        assert_eq!(stg.players[0].wins, 1);
        assert_eq!(stg.players[0].bonus, vec![Tile(TF, 1)]);
    }

    #[test]
    fn test_bonus_chain_replacement() {
        // the replacement draw is itself a bonus tile; the chain runs
        // until a non-bonus tile lands, with both tiles set aside
        let wall = rigged_wall(
            [
                "b111222333444c1",
                "d123456789c2345",
                "b556677889c6789",
                "z1122334455667",
            ],
            "f2f3c9",
        );

        let rule = Rule {
            rounds: 1,
            ..Rule::default()
        };
        let results = Arc::new(Mutex::new(vec![]));
        let listeners: Vec<Box<dyn Listener>> = vec![Box::new(ResultLog {
            results: results.clone(),
        })];
        let mut engine = GameEngine::new(
            0,
            rule,
            strategies(["Standard", "Standard", "Standard", "Standard"]),
            listeners,
        );
        engine.set_debug_wall(wall);
        engine.run();

        let stg = engine.get_stage();
        let pl = &stg.players[0];
        assert_eq!(pl.bonus, vec![Tile(TF, 2), Tile(TF, 3)]);
        // c9 landed, the hand was completed back to size and discarded from
        assert_eq!(pl.count_hand(), HAND_TILES);
        assert_eq!(stg.turn_count, 1);

        // the next seat finds the wall empty
        let results = results.lock().unwrap();
        match &results[0] {
            Event::Draw(e) => assert_eq!(e.draw_type, DrawType::WallExhausted),
            e => panic!("expected wall exhaustion, got {:?}", e),
        }
    }

    #[test]
    fn test_wall_exhaustion_mid_bonus() {
        // the wall dies while replacing a dealt bonus tile; the round ends
        // in a draw and the seat keeps the short hand
        let wall = rigged_wall(
            [
                "b111222333444f1",
                "d123456789c2345",
                "b556677889c6789",
                "z1122334455667",
            ],
            "",
        );

        let rule = Rule {
            rounds: 1,
            ..Rule::default()
        };
        let results = Arc::new(Mutex::new(vec![]));
        let listeners: Vec<Box<dyn Listener>> = vec![Box::new(ResultLog {
            results: results.clone(),
        })];
        let mut engine = GameEngine::new(
            0,
            rule,
            strategies(["Standard", "Standard", "Standard", "Standard"]),
            listeners,
        );
        engine.set_debug_wall(wall);
        engine.run();

        let results = results.lock().unwrap();
        match &results[0] {
            Event::Draw(e) => assert_eq!(e.draw_type, DrawType::WallExhausted),
            e => panic!("expected wall exhaustion, got {:?}", e),
        }

        let stg = engine.get_stage();
        assert_eq!(stg.wall_count, 0);
        assert_eq!(stg.turn_count, 0);
        assert_eq!(stg.players[0].bonus, vec![Tile(TF, 1)]);
        assert_eq!(stg.players[0].count_hand(), HAND_TILES - 1);
    }

    #[test]
    fn test_size_only_win_mode() {
        // with the simplified terminal check the dealer wins on the first draw
        let rule = Rule {
            rounds: 1,
            strict_win: false,
            ..Rule::default()
        };
        let results = Arc::new(Mutex::new(vec![]));
        let listeners: Vec<Box<dyn Listener>> = vec![Box::new(ResultLog {
            results: results.clone(),
        })];
        let mut engine = GameEngine::new(
            3,
            rule,
            strategies(["Standard", "Standard", "Standard", "Standard"]),
            listeners,
        );
        engine.run();

        let results = results.lock().unwrap();
        match &results[0] {
            Event::Win(e) => assert_eq!(e.seat, engine.get_stage().dealer),
            e => panic!("expected a win, got {:?}", e),
        }
    }
}

