//! Property-based tests for the navigator and scene resolution.
//!
//! These tests use proptest to drive navigators with random sequences of
//! navigations, pops, clock ticks and loop turns.

use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use viewnav::builder::{simple_graph, NavigatorBuilder};
use viewnav::core::DestinationId;
use viewnav::host::{Container, Looper, ManualClock, MemoryContainer, NextTurn};
use viewnav::motion::{SceneRef, SceneSpec};
use viewnav::transition::{
    DispatchEvent, PropertyAnimators, SharedTransition, ToEndScene, ViewTweens,
};
use viewnav::Navigator;

const NAMES: [&str; 4] = ["home", "list", "details", "settings"];

#[derive(Clone, Debug)]
enum Op {
    Navigate(usize),
    Pop,
    Advance(u64),
    Turn,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..NAMES.len()).prop_map(Op::Navigate),
        Just(Op::Pop),
        (0..250u64).prop_map(Op::Advance),
        Just(Op::Turn),
    ]
}

type Shared = SharedTransition<&'static str>;

struct Harness {
    navigator: Navigator<&'static str>,
    container: Rc<MemoryContainer<&'static str>>,
    looper: Looper,
    clock: ManualClock,
    max_running: Rc<Cell<usize>>,
}

/// Build a harness. With `host_delay`, the host reports every animation start
/// on the loop turn after the transition asked for it.
fn harness(host_delay: bool) -> Harness {
    let clock = ManualClock::new();
    let looper = Looper::new();
    let container = Rc::new(MemoryContainer::new());
    let shared: Rc<dyn Container<&'static str>> = container.clone();
    let ms = |millis| Rc::new(clock.animation(Duration::from_millis(millis)));
    let next_turn = |millis| {
        Rc::new(NextTurn::new(
            looper.clone(),
            clock.animation(Duration::from_millis(millis)),
        ))
    };
    let fallback: Shared;
    let fallback_pop: Shared;
    if host_delay {
        fallback = Rc::new(ToEndScene::<&'static str>::new(next_turn(120)));
        fallback_pop = Rc::new(ViewTweens::<&'static str>::new(next_turn(80), next_turn(160)));
    } else {
        fallback = Rc::new(ViewTweens::<&'static str>::new(ms(100), ms(200)));
        fallback_pop = Rc::new(PropertyAnimators::<&'static str>::new(ms(150), ms(50)));
    }

    let running = Rc::new(Cell::new(0usize));
    let max_running = Rc::new(Cell::new(0usize));
    let (sink, max_sink) = (Rc::clone(&running), Rc::clone(&max_running));

    let navigator = NavigatorBuilder::new()
        .container(shared)
        .graph(simple_graph(NAMES.map(|name| (name, name))).unwrap())
        .looper(looper.clone())
        .fallback(fallback)
        .fallback_pop(fallback_pop)
        .on_dispatch(move |event: &DispatchEvent| {
            match event {
                DispatchEvent::Started { .. } => sink.set(sink.get() + 1),
                DispatchEvent::Ended { .. } => sink.set(sink.get() - 1),
            }
            max_sink.set(max_sink.get().max(sink.get()));
        })
        .build()
        .unwrap();

    Harness {
        navigator,
        container,
        looper,
        clock,
        max_running,
    }
}

impl Harness {
    /// Run the clock and the loop until nothing is left to do.
    fn settle(&self) {
        while self.clock.running() > 0 || !self.looper.is_idle() {
            self.clock.finish_all();
            self.looper.run_until_idle();
        }
    }

    /// Apply `op`, returning (accepted pushes, accepted pops).
    fn apply(&mut self, op: &Op) -> (usize, usize) {
        match op {
            Op::Navigate(index) => {
                let outcome = self.navigator.navigate(NAMES[*index], None).unwrap();
                (usize::from(outcome.is_navigated()), 0)
            }
            Op::Pop => (0, usize::from(self.navigator.pop_back_stack())),
            Op::Advance(millis) => {
                self.clock.advance(Duration::from_millis(*millis));
                (0, 0)
            }
            Op::Turn => {
                self.looper.run_turn();
                (0, 0)
            }
        }
    }
}

prop_compose! {
    fn arbitrary_scene()(present in any::<bool>(), index in 0..3u8) -> Option<String> {
        present.then(|| format!("scene_{index}"))
    }
}

proptest! {
    #[test]
    fn depth_equals_accepted_pushes_minus_pops(
        ops in prop::collection::vec(arbitrary_op(), 0..60),
        host_delay in any::<bool>(),
    ) {
        let mut h = harness(host_delay);
        h.navigator.start().unwrap();
        let (mut pushes, mut pops) = (0usize, 0usize);

        for op in &ops {
            let (pushed, popped) = h.apply(op);
            pushes += pushed;
            pops += popped;

            prop_assert!(h.navigator.depth() >= 1);
            prop_assert_eq!(h.navigator.depth(), pushes - pops + 1);
        }
    }

    #[test]
    fn at_most_one_dispatch_runs_at_a_time(
        ops in prop::collection::vec(arbitrary_op(), 0..60),
        host_delay in any::<bool>(),
    ) {
        let mut h = harness(host_delay);
        h.navigator.start().unwrap();

        for op in &ops {
            h.apply(op);
            prop_assert!(h.max_running.get() <= 1);
        }
    }

    #[test]
    fn repeated_navigation_is_ignored_while_entering(
        ops in prop::collection::vec(arbitrary_op(), 0..30),
        target in 0..NAMES.len(),
        host_delay in any::<bool>(),
    ) {
        let mut h = harness(host_delay);
        h.navigator.start().unwrap();
        for op in &ops {
            h.apply(op);
        }

        let outcome = h.navigator.navigate(NAMES[target], None).unwrap();
        if outcome.is_navigated() {
            let depth = h.navigator.depth();
            let attached = h.container.attach_count(&NAMES[target]);
            let again = h.navigator.navigate(NAMES[target], None).unwrap();

            prop_assert!(!again.is_navigated());
            prop_assert_eq!(h.navigator.depth(), depth);
            prop_assert_eq!(h.container.attach_count(&NAMES[target]), attached);
        }
    }

    #[test]
    fn only_the_top_is_attached_at_rest(
        ops in prop::collection::vec(arbitrary_op(), 0..60),
        host_delay in any::<bool>(),
    ) {
        let mut h = harness(host_delay);
        h.navigator.start().unwrap();
        for op in &ops {
            h.apply(op);
        }

        h.settle();

        let top = h.navigator.current().map(DestinationId::as_str);
        prop_assert!(!h.navigator.is_transitioning());
        prop_assert_eq!(h.container.children(), top.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn pop_at_depth_one_changes_nothing(presses in 1..5usize) {
        let h = harness(false);
        let mut navigator = h.navigator;
        navigator.start().unwrap();
        let history_len = navigator.history().len();

        for _ in 0..presses {
            prop_assert!(!navigator.pop_back_stack());
        }

        prop_assert_eq!(navigator.stack_ids(), vec![DestinationId::from("home")]);
        prop_assert_eq!(navigator.history().len(), history_len);
        prop_assert_eq!(h.container.children(), vec!["home"]);
    }

    #[test]
    fn scene_resolution_follows_chain(
        exit in arbitrary_scene(),
        pop_enter in arbitrary_scene(),
        pop_exit in arbitrary_scene(),
    ) {
        let spec = SceneSpec {
            enter: Some("enter".into()),
            exit: exit.clone().map(Into::into),
            pop_enter: pop_enter.clone().map(Into::into),
            pop_exit: pop_exit.clone().map(Into::into),
        };
        let scenes = spec.resolve(&DestinationId::from("dest")).unwrap();

        prop_assert_eq!(&scenes.enter, &SceneRef::forward("enter"));
        prop_assert_eq!(
            &scenes.exit,
            &exit.map_or_else(|| SceneRef::backward("enter"), SceneRef::forward)
        );
        let expected_pop_enter = pop_enter.map_or_else(|| SceneRef::forward("enter"), SceneRef::forward);
        prop_assert_eq!(&scenes.pop_enter, &expected_pop_enter);
        prop_assert_eq!(
            &scenes.pop_exit,
            &pop_exit.map_or_else(|| expected_pop_enter.reversed(), SceneRef::forward)
        );
    }
}
