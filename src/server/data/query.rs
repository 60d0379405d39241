//! Filterable, sortable, offset-paginated list queries.
//!
//! Every list endpoint goes through `fetch_page`. Predicates are SeaORM conditions, so each
//! bound value travels with the expression that uses it and placeholder numbering is assigned
//! once, when the statement is rendered. Sort columns come from closed `SortField` enums and
//! never from request text.
//!
//! Rows that tie on the sort column have no defined relative order, so a row can move between
//! adjacent pages when ties straddle a page boundary.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use sea_orm::{
    sea_query::{Condition, Expr, ExprTrait, Func, LikeExpr, Order},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::model::api::PaginationDto;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;
/// Highest page whose offset still fits the signed 64-bit OFFSET SQLite binds.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_LIMIT + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Case-insensitive match on `asc` / `desc`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

/// Closed set of columns a resource may be sorted by.
pub trait SortField: Copy + Sized + 'static {
    type Column: ColumnTrait;

    const DEFAULT: Self;
    const DEFAULT_ORDER: SortOrder;
    const ALLOWED: &'static [Self];

    /// Name accepted in the `sortBy` query parameter and echoed back in `filters`.
    fn name(&self) -> &'static str;

    fn column(&self) -> Self::Column;

    fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        Self::ALLOWED.iter().copied().find(|f| f.name() == value)
    }
}

/// Normalized paging, sorting and search inputs.
///
/// Construction never fails: anything missing or outside its allow-list or bound is replaced
/// by the default, so the builder only ever sees valid values.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOptions<S> {
    pub page: u64,
    pub limit: u64,
    pub sort_by: S,
    pub order: SortOrder,
    pub search: Option<String>,
}

impl<S: SortField> ListOptions<S> {
    pub fn new(
        page: Option<u64>,
        limit: Option<u64>,
        sort_by: Option<&str>,
        order: Option<&str>,
        search: Option<&str>,
    ) -> Self {
        Self {
            page: page
                .filter(|p| (1..=MAX_PAGE).contains(p))
                .unwrap_or(DEFAULT_PAGE),
            limit: limit
                .filter(|l| (1..=MAX_LIMIT).contains(l))
                .unwrap_or(DEFAULT_LIMIT),
            sort_by: sort_by.and_then(S::parse).unwrap_or(S::DEFAULT),
            order: order.and_then(SortOrder::parse).unwrap_or(S::DEFAULT_ORDER),
            search: search
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    /// Rows skipped before the page, never above `i64::MAX`.
    pub fn offset(&self) -> u64 {
        Ord::min(
            self.page.saturating_sub(1).saturating_mul(self.limit),
            i64::MAX as u64,
        )
    }
}

impl<S: SortField> Default for ListOptions<S> {
    fn default() -> Self {
        Self::new(None, None, None, None, None)
    }
}

/// Conjunction of predicates applied to both the count and the page query.
#[derive(Debug, Clone)]
pub struct Filter {
    condition: Condition,
}

impl Filter {
    pub fn new() -> Self {
        Self {
            condition: Condition::all(),
        }
    }

    pub fn add<C>(mut self, expr: C) -> Self
    where
        C: Into<Condition>,
    {
        self.condition = self.condition.add(expr);
        self
    }

    /// Adds the predicate built from `value` when it is present.
    pub fn add_option<T, C, F>(self, value: Option<T>, build: F) -> Self
    where
        F: FnOnce(T) -> C,
        C: Into<Condition>,
    {
        match value {
            Some(value) => self.add(build(value)),
            None => self,
        }
    }

    /// Case-insensitive substring match of `term` against any of `columns`.
    ///
    /// LIKE wildcards in the term are escaped and match literally.
    pub fn search<C: ColumnTrait>(self, columns: &[C], term: Option<&str>) -> Self {
        let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) else {
            return self;
        };
        if columns.is_empty() {
            return self;
        }

        let pattern = format!("%{}%", escape_like(&term.to_lowercase()));

        let any = columns.iter().fold(Condition::any(), |any, column| {
            any.add(
                Expr::expr(Func::lower(Expr::col(column.as_column_ref())))
                    .like(LikeExpr::new(pattern.clone()).escape('\\')),
            )
        });

        self.add(any)
    }

    /// Bounds a timestamp column by calendar days in UTC, both ends inclusive.
    pub fn timestamp_range<C: ColumnTrait>(
        self,
        column: C,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Self {
        self.add_option(start, |start| column.gte(start_of_day(start)))
            .add_option(end.and_then(|end| end.checked_add_days(Days::new(1))), |next| {
                column.lt(start_of_day(next))
            })
    }

    /// Bounds a date column, both ends inclusive.
    pub fn date_range<C: ColumnTrait>(
        self,
        column: C,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Self {
        self.add_option(start, |start| column.gte(start))
            .add_option(end, |end| column.lte(end))
    }

    pub fn into_condition(self) -> Condition {
        self.condition
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::new()
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_records: u64,
    pub limit: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
}

impl Pagination {
    pub fn new(page: u64, limit: u64, total_records: u64) -> Self {
        let total_pages = if limit > 0 {
            total_records.div_ceil(limit)
        } else {
            0
        };
        let has_next_page = page < total_pages;
        let has_prev_page = page > 1;

        Self {
            current_page: page,
            total_pages,
            total_records,
            limit,
            has_next_page,
            has_prev_page,
            next_page: has_next_page.then(|| page + 1),
            prev_page: has_prev_page.then(|| page - 1),
        }
    }

    pub fn into_dto(self) -> PaginationDto {
        PaginationDto {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_records: self.total_records,
            limit: self.limit,
            has_next_page: self.has_next_page,
            has_prev_page: self.has_prev_page,
            next_page: self.next_page,
            prev_page: self.prev_page,
        }
    }
}

/// One page of records with its pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            records: self.records.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

/// Applies ORDER BY, LIMIT and OFFSET for the requested page.
pub fn page_select<E, S>(select: Select<E>, options: &ListOptions<S>) -> Select<E>
where
    E: EntityTrait,
    S: SortField,
{
    select
        .order_by(options.sort_by.column(), options.order.into())
        .limit(options.limit)
        .offset(options.offset())
}

/// Counts the filtered set, then fetches the requested page of it as `M`.
///
/// Both queries share the same condition. Database errors propagate unchanged.
pub async fn fetch_page<E, M, S>(
    db: &DatabaseConnection,
    select: Select<E>,
    filter: Filter,
    options: &ListOptions<S>,
) -> Result<Page<M>, DbErr>
where
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
    M: FromQueryResult + Send + Sync,
    S: SortField,
{
    let select = select.filter(filter.into_condition());

    let total_records = select.clone().count(db).await?;

    let records = page_select(select, options)
        .into_model::<M>()
        .all(db)
        .await?;

    Ok(Page {
        records,
        pagination: Pagination::new(options.page, options.limit, total_records),
    })
}
