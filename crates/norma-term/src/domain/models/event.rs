#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Event {
    KeyboardCTRLC,
    KeyboardQuit,
    StepAdvance,
    StepRetreat,
    UITick,
    UIScrollDown,
    UIScrollUp,
    UIScrollPageDown,
    UIScrollPageUp,
    UIScrollTop,
    UIScrollBottom,
}
