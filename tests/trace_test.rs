#![cfg(feature = "tracing")]

use lifecell::LifeCell;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Collects the `op` field of every `lifecell` event.
#[derive(Clone, Default)]
struct Ops(Arc<Mutex<Vec<String>>>);

struct OpVisitor<'a>(&'a mut Option<String>);

impl Visit for OpVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "op" {
            *self.0 = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "op" {
            *self.0 = Some(format!("{value:?}").trim_matches('"').to_owned());
        }
    }
}

impl<S: Subscriber> Layer<S> for Ops {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != "lifecell" {
            return;
        }
        let mut op = None;
        event.record(&mut OpVisitor(&mut op));
        if let Some(op) = op {
            self.0.lock().unwrap().push(op);
        }
    }
}

#[test]
fn test_transitions_emit_trace_events() {
    let ops = Ops::default();
    let subscriber = tracing_subscriber::registry().with(ops.clone());

    tracing::subscriber::with_default(subscriber, || {
        let mut cell = LifeCell::empty();
        cell.construct(String::from("a"));
        unsafe {
            cell.replace(String::from("b"));
            let _ = cell.take();
        }
        cell.construct(String::from("c")).destroy();
    });

    let seen = ops.0.lock().unwrap().clone();
    assert_eq!(
        seen,
        ["construct", "destroy", "construct", "take", "construct", "destroy"]
    );
}
