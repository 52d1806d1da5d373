//! HTTP client for the backend API (auth, profile, categories, transactions, summary).

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::ids::{CategoryId, TransactionId};
use crate::models::{Category, MonthlySummary, Transaction, TransactionGroup, TransactionType, User};
use crate::session::Session;
use crate::wire::{
    AuthResponse, BalanceSummaryResponse, CategoriesListResponse, CategoryResponse,
    CreateCategoryRequest, CreateTransactionRequest, GroupedTransactionsResponse, LoginRequest,
    MonthlySummaryListResponse, RegisterRequest, TransactionResponse, TransactionsListResponse,
    UpdateProfileRequest, UpdateTransactionRequest, UserResponse,
};
use chrono::NaiveDate;
use reqwest::{Method, RequestBuilder, Url};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Query for `GET transactions`. Unset fields are left out of the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn month(month: Option<u32>, year: Option<i32>) -> Self {
        Self {
            month,
            year,
            ..Self::default()
        }
    }
}

/// Query for `GET transactions/grouped`: either month/year or a date range.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl GroupedFilter {
    pub fn month(month: Option<u32>, year: Option<i32>) -> Self {
        Self {
            month,
            year,
            ..Self::default()
        }
    }

    pub fn range(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            ..Self::default()
        }
    }
}

/// Query for `GET summary/history`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub name: String,
    pub category_id: CategoryId,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub note: Option<String>,
}

/// Editable fields of a transaction. The type cannot be changed after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionUpdate {
    pub name: String,
    pub category_id: CategoryId,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub note: Option<String>,
}

fn validate_entry(name: &str, amount: Decimal) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::InvalidInput("name must not be blank".to_string()));
    }
    if amount <= Decimal::ZERO {
        return Err(ApiError::InvalidInput(format!("amount must be positive, got {}", amount)));
    }
    Ok(())
}

impl NewTransaction {
    /// Only income and expense can be created.
    pub fn validate(&self) -> Result<(), ApiError> {
        if let TransactionType::Other(kind) = &self.kind {
            return Err(ApiError::InvalidInput(format!(
                "type must be income or expense, got {:?}",
                kind
            )));
        }
        validate_entry(&self.name, self.amount)
    }
}

impl TransactionUpdate {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_entry(&self.name, self.amount)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()?;
        let session = match &config.token {
            Some(token) => Session::with_token(token.as_str()),
            None => Session::default(),
        };
        Ok(Self {
            http,
            base_url: config.base_url()?,
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Config(format!("{}: {}", path, e)))
    }

    /// Request builder with the bearer token attached when logged in.
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let builder = self.http.request(method, self.url(path)?);
        Ok(match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    /// Send and return the body of a 2xx response.
    async fn send(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "api request");
        let resp = self.http.execute(request).await?;
        let status = resp.status();
        let text = resp.text().await?;
        debug!(%method, %url, status = status.as_u16(), "api response");
        if !status.is_success() {
            return Err(ApiError::Server { status, body: text });
        }
        Ok(text)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let text = self.send(builder).await?;
        Ok(serde_json::from_str(&text)?)
    }

    // --- Auth ---

    /// POST auth/register. Starts a session on success.
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        date_of_birth: &str,
    ) -> Result<User, ApiError> {
        let body = RegisterRequest {
            full_name: full_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            date_of_birth: date_of_birth.to_string(),
        };
        debug!(email, "register");
        let resp: AuthResponse = self
            .send_json(self.request(Method::POST, "auth/register")?.json(&body))
            .await?;
        Ok(self.start_session(resp))
    }

    /// POST auth/login. Starts a session on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: AuthResponse = self
            .send_json(self.request(Method::POST, "auth/login")?.json(&body))
            .await?;
        Ok(self.start_session(resp))
    }

    fn start_session(&self, resp: AuthResponse) -> User {
        self.session.start(resp.token, resp.user.id.clone());
        resp.user.into()
    }

    pub fn logout(&self) {
        self.session.clear();
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    // --- Profile ---

    /// GET user/profile
    pub async fn profile(&self) -> Result<User, ApiError> {
        let resp: UserResponse = self
            .send_json(self.request(Method::GET, "user/profile")?)
            .await?;
        Ok(resp.into())
    }

    /// PUT user/profile
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<User, ApiError> {
        let body = UpdateProfileRequest {
            full_name: update.full_name,
            date_of_birth: update.date_of_birth,
            photo_url: update.photo_url,
        };
        let resp: UserResponse = self
            .send_json(self.request(Method::PUT, "user/profile")?.json(&body))
            .await?;
        Ok(resp.into())
    }

    // --- Categories ---

    /// GET categories
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let resp: CategoriesListResponse = self
            .send_json(self.request(Method::GET, "categories")?)
            .await?;
        Ok(resp.categories.into_iter().map(Category::from).collect())
    }

    /// POST categories
    pub async fn create_category(
        &self,
        name: &str,
        icon: &str,
        color: &str,
    ) -> Result<Category, ApiError> {
        let body = CreateCategoryRequest {
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        };
        debug!(name, icon, color, "create category");
        let resp: CategoryResponse = self
            .send_json(self.request(Method::POST, "categories")?.json(&body))
            .await?;
        Ok(resp.into())
    }

    /// DELETE categories/{id}
    pub async fn delete_category(&self, id: &CategoryId) -> Result<(), ApiError> {
        let path = format!("categories/{}", id);
        self.send(self.request(Method::DELETE, &path)?).await?;
        Ok(())
    }

    // --- Transactions ---

    /// GET transactions (flat, unordered).
    pub async fn transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, ApiError> {
        let resp: TransactionsListResponse = self
            .send_json(self.request(Method::GET, "transactions")?.query(filter))
            .await?;
        Ok(resp.transactions.into_iter().map(Transaction::from).collect())
    }

    /// GET transactions/grouped. Server order and totals are passed through.
    pub async fn grouped_transactions(
        &self,
        filter: &GroupedFilter,
    ) -> Result<Vec<TransactionGroup>, ApiError> {
        let resp: GroupedTransactionsResponse = self
            .send_json(self.request(Method::GET, "transactions/grouped")?.query(filter))
            .await?;
        Ok(resp.groups.into_iter().map(TransactionGroup::from).collect())
    }

    /// GET transactions/{id}
    pub async fn transaction(&self, id: &TransactionId) -> Result<Transaction, ApiError> {
        let path = format!("transactions/{}", id);
        let resp: TransactionResponse = self.send_json(self.request(Method::GET, &path)?).await?;
        Ok(resp.into())
    }

    /// POST transactions
    pub async fn create_transaction(&self, new: NewTransaction) -> Result<Transaction, ApiError> {
        new.validate()?;
        debug!(kind = %new.kind, name = %new.name, amount = %new.amount, date = %new.date, "create transaction");
        let body = CreateTransactionRequest {
            kind: new.kind,
            name: new.name,
            category_id: new.category_id,
            amount: new.amount,
            date: new.date,
            note: new.note,
        };
        let resp: TransactionResponse = self
            .send_json(self.request(Method::POST, "transactions")?.json(&body))
            .await?;
        Ok(resp.into())
    }

    /// PUT transactions/{id}
    pub async fn update_transaction(
        &self,
        id: &TransactionId,
        update: TransactionUpdate,
    ) -> Result<Transaction, ApiError> {
        update.validate()?;
        let path = format!("transactions/{}", id);
        let body = UpdateTransactionRequest {
            name: update.name,
            category_id: update.category_id,
            amount: update.amount,
            date: update.date,
            note: update.note,
        };
        let resp: TransactionResponse = self
            .send_json(self.request(Method::PUT, &path)?.json(&body))
            .await?;
        Ok(resp.into())
    }

    /// DELETE transactions/{id}
    pub async fn delete_transaction(&self, id: &TransactionId) -> Result<(), ApiError> {
        let path = format!("transactions/{}", id);
        self.send(self.request(Method::DELETE, &path)?).await?;
        Ok(())
    }

    // --- Summary ---

    /// GET summary?month=&year=
    pub async fn summary(&self, month: u32, year: i32) -> Result<MonthlySummary, ApiError> {
        let resp: BalanceSummaryResponse = self
            .send_json(
                self.request(Method::GET, "summary")?
                    .query(&[("month", month.to_string()), ("year", year.to_string())]),
            )
            .await?;
        Ok(resp.into())
    }

    /// GET summary/history
    pub async fn summary_history(&self, range: &SummaryRange) -> Result<Vec<MonthlySummary>, ApiError> {
        let resp: MonthlySummaryListResponse = self
            .send_json(self.request(Method::GET, "summary/history")?.query(range))
            .await?;
        Ok(resp.summaries.into_iter().map(MonthlySummary::from).collect())
    }
}
