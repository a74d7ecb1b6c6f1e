//! 缓冲区搜索：字面量多匹配定位与环绕导航

/// 一次命中：字节偏移与字节长度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    pub start: usize,
    pub len: usize,
}

/// 一轮搜索的全部状态；模式或缓冲区变化时整体重建，不做增量更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    pub pattern: String,
    /// 按起始偏移升序
    pub matches: Vec<SearchMatch>,
    /// 当前命中下标；无命中时为 None
    pub current: Option<usize>,
}

/// 字面量子串搜索：区分大小写、不重叠、自左向右贪心
///
/// 每次命中后扫描位置跳到命中末尾，因此 "ababab" 里 "aba" 只命中一次。
/// 空模式返回空命中列表，不算错误。
pub fn search(text: &str, pattern: &str) -> SearchSession {
    let mut matches = Vec::new();
    if !pattern.is_empty() {
        let mut from = 0;
        while let Some(pos) = text[from..].find(pattern) {
            let start = from + pos;
            matches.push(SearchMatch {
                start,
                len: pattern.len(),
            });
            from = start + pattern.len();
        }
    }
    let current = if matches.is_empty() { None } else { Some(0) };
    SearchSession {
        pattern: pattern.to_string(),
        matches,
        current,
    }
}

impl SearchSession {
    /// 当前命中；无命中时为 None
    pub fn current_match(&self) -> Option<&SearchMatch> {
        self.current.and_then(|i| self.matches.get(i))
    }

    /// 下一个命中，越过末尾回绕到第一个；无命中时不动作
    pub fn next_match(&mut self) {
        if let Some(i) = self.current {
            self.current = Some((i + 1) % self.matches.len());
        }
    }

    /// 上一个命中，越过开头回绕到最后一个；无命中时不动作
    pub fn prev_match(&mut self) {
        if let Some(i) = self.current {
            self.current = Some((i + self.matches.len() - 1) % self.matches.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_non_overlapping_matches() {
        let session = search("foo bar foo baz foo", "foo");
        assert_eq!(session.matches.len(), 3);
        let starts: Vec<_> = session.matches.iter().map(|m| m.start).collect();
        assert_eq!(starts, vec![0, 8, 16], "命中应按偏移升序排列");
        assert_eq!(session.current, Some(0), "新会话应定位到第一个命中");
    }

    #[test]
    fn test_overlapping_occurrences_skipped() {
        let session = search("ababab", "aba");
        assert_eq!(
            session.matches,
            vec![SearchMatch { start: 0, len: 3 }],
            "偏移2处的 aba 与首个命中重叠，不应上报"
        );
    }

    #[test]
    fn test_empty_pattern_yields_no_matches() {
        let session = search("anything", "");
        assert!(session.matches.is_empty());
        assert_eq!(session.current, None);
    }

    #[test]
    fn test_no_match_in_empty_text() {
        let session = search("", "x");
        assert!(session.matches.is_empty());
        assert_eq!(session.current, None);
    }

    #[test]
    fn test_case_sensitive() {
        let session = search("Foo foo", "foo");
        assert_eq!(session.matches.len(), 1);
        assert_eq!(session.matches[0].start, 4);
    }

    #[test]
    fn test_next_wraps_around_after_full_cycle() {
        let mut session = search("a.a.a", "a");
        assert_eq!(session.matches.len(), 3);
        // 从第一个命中出发走满一圈应回到第一个
        for _ in 0..3 {
            session.next_match();
        }
        assert_eq!(session.current, Some(0));
    }

    #[test]
    fn test_prev_from_first_lands_on_last() {
        let mut session = search("a.a.a", "a");
        session.prev_match();
        assert_eq!(session.current, Some(2));
    }

    #[test]
    fn test_navigation_noop_without_matches() {
        let mut session = search("abc", "zzz");
        session.next_match();
        session.prev_match();
        assert_eq!(session.current, None, "无命中时导航应保持 None");
    }

    #[test]
    fn test_offsets_are_byte_offsets() {
        // "你好" 占 6 字节，之后才是命中
        let session = search("你好foo", "foo");
        assert_eq!(session.matches[0].start, 6);
        assert_eq!(session.matches[0].len, 3);
    }
}
