// ==========================================
// 设备可靠性分析 - 运行日历
// ==========================================
// 职责: 日期区间 → 生产小时数 (固定周排班)
// 口径: 整日粒度, 周一至周五每日固定小时数, 周末为 0
// 红线: 无状态, 纯函数
// ==========================================

use crate::config::engine_config::DEFAULT_PRODUCTIVE_HOURS_PER_DAY;
use chrono::{Datelike, NaiveDate, Weekday};

// ==========================================
// OperationalCalendar - 运行日历
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationalCalendar {
    hours_per_day: f64,
}

impl Default for OperationalCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationalCalendar {
    /// 标准排班: 工作日 10 小时
    pub fn new() -> Self {
        Self {
            hours_per_day: DEFAULT_PRODUCTIVE_HOURS_PER_DAY,
        }
    }

    /// 自定义工作日小时数
    pub fn with_hours_per_day(hours_per_day: f64) -> Self {
        Self { hours_per_day }
    }

    pub fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }

    /// 是否为生产日 (周一至周五)
    pub fn is_productive_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// 区间 [start, end] 内的生产小时数
    ///
    /// - start > end 返回 0
    /// - 边界日整日计入 (不做部分日加权)
    pub fn total_productive_hours(&self, start: NaiveDate, end: NaiveDate) -> f64 {
        if start > end {
            return 0.0;
        }

        let productive_days = start
            .iter_days()
            .take_while(|day| *day <= end)
            .filter(|day| self.is_productive_day(*day))
            .count();

        productive_days as f64 * self.hours_per_day
    }

    /// 指定月份的生产小时数 (month: 1..=12)
    pub fn productive_hours_in_month(&self, year: i32, month: u32) -> f64 {
        match month_bounds(year, month) {
            Some((first, last)) => self.total_productive_hours(first, last),
            None => 0.0,
        }
    }
}

/// 月份首日与末日 (month: 1..=12)
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_first.pred_opt()?))
}
