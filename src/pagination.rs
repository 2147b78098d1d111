use serde::Deserialize;

/// Page size applied when a request paginates without an explicit `limit`.
pub const DEFAULT_LIMIT: usize = 100;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PaginationError {
    #[error("skip must be non-negative")]
    NegativeSkip,
    #[error("limit must be non-negative")]
    NegativeLimit,
    #[error("skip is past the end of the collection")]
    SkipOutOfRange,
}

/// Raw `skip` / `limit` query parameters as they arrive on a request.
///
/// The values are accepted as signed integers so negative input can be
/// rejected as a client error instead of failing opaquely during extraction.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Resolved pagination intent.
///
/// `All` means neither parameter was supplied, which is deliberately distinct
/// from a request that spells out the default values: an unpaginated request
/// returns the entire collection and skips bounds checking entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pagination {
    All,
    Page { skip: usize, limit: usize },
}

impl PageQuery {
    /// Validates the raw parameters and resolves defaults (`skip = 0`,
    /// `limit = 100`) for whichever of the pair is missing.
    pub fn resolve(self) -> Result<Pagination, PaginationError> {
        if self.skip.is_none() && self.limit.is_none() {
            return Ok(Pagination::All);
        }

        let skip = match self.skip {
            Some(s) if s < 0 => return Err(PaginationError::NegativeSkip),
            Some(s) => s as usize,
            None => 0,
        };
        let limit = match self.limit {
            Some(l) if l < 0 => return Err(PaginationError::NegativeLimit),
            Some(l) => l as usize,
            None => DEFAULT_LIMIT,
        };

        Ok(Pagination::Page { skip, limit })
    }
}

/// Returns the elements in `[skip, min(skip + limit, len))`, preserving
/// input order.
///
/// `skip` strictly greater than the collection length is rejected rather
/// than mapped to an empty page; skipping to exactly the end yields an empty
/// page, as does `limit == 0`.
pub fn paginate<T>(items: &[T], skip: usize, limit: usize) -> Result<&[T], PaginationError> {
    if skip > items.len() {
        return Err(PaginationError::SkipOutOfRange);
    }

    let end = skip.saturating_add(limit).min(items.len());
    Ok(&items[skip..end])
}
