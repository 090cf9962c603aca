use crate::kernel::services::ports::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SaveSettings(Settings),
    /// 请求宿主切换全屏，宿主完成后回报 `Action::FullscreenChanged`
    SetFullscreen(bool),
}
