//! 高亮合成：按画家算法顺序产出三层渲染区间

use crate::model::search::SearchSession;

/// 高亮层级，列表中靠后的层在重叠处覆盖靠前的层
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightLayer {
    /// 当前行标记：零长度锚点，渲染端展开为整行低强调背景
    CurrentLine,
    /// 全部命中的统一背景
    Match,
    /// 当前命中，前景/背景均区别于普通命中
    CurrentMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub len: usize,
    pub layer: HighlightLayer,
}

/// 由搜索会话与光标位置合成有序高亮区间
///
/// 顺序固定：当前行锚点、全部命中、当前命中。无会话或空模式时只剩
/// 当前行锚点；有当前命中时锚点落在命中起点，否则落在光标处。
pub fn compose_highlights(session: Option<&SearchSession>, cursor_offset: usize) -> Vec<HighlightSpan> {
    let anchor = session
        .and_then(|s| s.current_match())
        .map(|m| m.start)
        .unwrap_or(cursor_offset);

    let mut spans = vec![HighlightSpan {
        start: anchor,
        len: 0,
        layer: HighlightLayer::CurrentLine,
    }];

    if let Some(session) = session {
        if !session.pattern.is_empty() {
            for m in &session.matches {
                spans.push(HighlightSpan {
                    start: m.start,
                    len: m.len,
                    layer: HighlightLayer::Match,
                });
            }
            if let Some(m) = session.current_match() {
                spans.push(HighlightSpan {
                    start: m.start,
                    len: m.len,
                    layer: HighlightLayer::CurrentMatch,
                });
            }
        }
    }

    spans
}
