// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Shared toolkit state

use crate::{GlCommand, PaintOp};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::rc::Rc;
use tabby::config::{Config, Palette};
use tabby::event::{Event, EventCx};
use tabby::geom::Size;
use tabby::WidgetId;

pub(crate) type Shared = Rc<RefCell<State>>;

/// Per-control data visible to the toolkit (and to tests)
#[derive(Debug, Default)]
pub(crate) struct Record {
    pub kind: &'static str,
    pub parent: Option<WidgetId>,
    pub label: String,
    pub redraws: u32,
    pub label_redraws: u32,
    pub exposed: bool,
    pub flushes: u32,
    pub icon: Option<Size>,
    pub frames: Vec<Vec<GlCommand>>,
}

/// An item of the scripted event queue
#[derive(Debug)]
pub(crate) enum Scripted {
    Event {
        window: WidgetId,
        cx: EventCx,
        event: Event,
    },
    Draw(WidgetId),
}

#[derive(Debug, Default)]
pub(crate) struct State {
    next_id: u64,
    records: HashMap<WidgetId, Record>,
    pub popups: VecDeque<Option<usize>>,
    pub queue: VecDeque<Scripted>,
    pub images: HashMap<PathBuf, Size>,
    pub config: Option<Config>,
    pub focus: Option<WidgetId>,
    pub paint: Vec<PaintOp>,
}

impl State {
    /// Allocate an identifier and a record
    pub fn register(&mut self, kind: &'static str, label: &str) -> WidgetId {
        self.next_id += 1;
        let id = WidgetId::new(self.next_id);
        log::debug!("register: {kind} {id} {label:?}");
        self.records.insert(id, Record {
            kind,
            label: label.to_string(),
            ..Default::default()
        });
        id
    }

    pub fn record(&self, id: WidgetId) -> Option<&Record> {
        self.records.get(&id)
    }

    pub fn record_mut(&mut self, id: WidgetId) -> Option<&mut Record> {
        self.records.get_mut(&id)
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.record(id).and_then(|r| r.parent)
    }

    pub fn redraw(&mut self, id: WidgetId) {
        if let Some(r) = self.record_mut(id) {
            r.redraws += 1;
        }
    }

    /// The palette of the applied configuration
    pub fn palette(&self) -> Palette {
        self.config
            .as_ref()
            .map(|config| config.palette())
            .unwrap_or(Palette::LIGHT)
    }
}
