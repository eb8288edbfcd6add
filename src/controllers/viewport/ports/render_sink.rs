use crate::controllers::viewport::events::render::RenderEvent;

pub trait RenderSink {
    fn present(&self, event: RenderEvent);
}
