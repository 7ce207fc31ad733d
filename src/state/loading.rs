// Async data loading primitives.
// Shared loading-state and pagination bookkeeping for feed views.

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Paginated list data.
#[derive(Debug, Clone)]
pub struct PaginatedList<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub current_page: u32,
    pub has_more: bool,
}

impl<T> Default for PaginatedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            current_page: 1,
            has_more: false,
        }
    }
}

impl<T> PaginatedList<T> {
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        let has_more = items.len() < total_count as usize;
        Self {
            items,
            total_count,
            current_page: 1,
            has_more,
        }
    }

    /// Append the next page of items.
    pub fn append(&mut self, mut items: Vec<T>, total_count: u64) {
        self.items.append(&mut items);
        self.total_count = total_count;
        self.current_page += 1;
        self.has_more = self.items.len() < total_count as usize;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
