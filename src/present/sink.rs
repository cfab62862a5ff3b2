use std::io::Write;

use crate::{
    effects::particles::{Burst, FieldSite, ParticleField},
    foundation::error::CloserResult,
    story::model::SceneFrame,
};

/// Where derived values go. The core never touches a rendering surface; it
/// hands each frame, each one-shot burst and, once at mount, each ambient
/// particle field to a sink.
pub trait PresentationSink {
    fn frame(&mut self, frame: &SceneFrame) -> CloserResult<()>;
    fn burst(&mut self, burst: &Burst) -> CloserResult<()>;
    fn particles(&mut self, site: FieldSite, field: &ParticleField) -> CloserResult<()>;
}

impl<K: PresentationSink + ?Sized> PresentationSink for Box<K> {
    fn frame(&mut self, frame: &SceneFrame) -> CloserResult<()> {
        (**self).frame(frame)
    }

    fn burst(&mut self, burst: &Burst) -> CloserResult<()> {
        (**self).burst(burst)
    }

    fn particles(&mut self, site: FieldSite, field: &ParticleField) -> CloserResult<()> {
        (**self).particles(site, field)
    }
}

/// Keeps everything it receives, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<SceneFrame>,
    pub bursts: Vec<Burst>,
    pub fields: Vec<(FieldSite, ParticleField)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&SceneFrame> {
        self.frames.last()
    }
}

impl PresentationSink for RecordingSink {
    fn frame(&mut self, frame: &SceneFrame) -> CloserResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn burst(&mut self, burst: &Burst) -> CloserResult<()> {
        self.bursts.push(burst.clone());
        Ok(())
    }

    fn particles(&mut self, site: FieldSite, field: &ParticleField) -> CloserResult<()> {
        self.fields.push((site, field.clone()));
        Ok(())
    }
}

#[derive(serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Frame(&'a SceneFrame),
    Burst(&'a Burst),
    Particles {
        site: FieldSite,
        #[serde(flatten)]
        field: &'a ParticleField,
    },
}

/// Writes one JSON object per line: `{"event":"frame",...}`,
/// `{"event":"burst",...}` or `{"event":"particles","site":...}`.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn flush(&mut self) -> CloserResult<()> {
        self.out.flush()?;
        Ok(())
    }

    fn write_event(&mut self, event: &Event<'_>) -> CloserResult<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> PresentationSink for JsonLinesSink<W> {
    fn frame(&mut self, frame: &SceneFrame) -> CloserResult<()> {
        self.write_event(&Event::Frame(frame))
    }

    fn burst(&mut self, burst: &Burst) -> CloserResult<()> {
        self.write_event(&Event::Burst(burst))?;
        self.out.flush()?;
        Ok(())
    }

    fn particles(&mut self, site: FieldSite, field: &ParticleField) -> CloserResult<()> {
        self.write_event(&Event::Particles { site, field })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/present/sink.rs"]
mod tests;
