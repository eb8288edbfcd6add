use crate::controllers::viewport::data::frame_data::FrameData;

#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
}
