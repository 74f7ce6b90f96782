use account_console_api::{Account, CreateAccountData, UpdateAccountData};

use super::{Create, Delete, ListAll, Load, Update};

/// Everything the account store needs from the remote account service.
///
/// Implemented automatically for any type providing the five operations.
pub trait AccountGateway:
    ListAll<Account>
    + Load<Account>
    + Create<CreateAccountData, Account>
    + Update<UpdateAccountData, Account>
    + Delete
{
}

impl<G> AccountGateway for G where
    G: ListAll<Account>
        + Load<Account>
        + Create<CreateAccountData, Account>
        + Update<UpdateAccountData, Account>
        + Delete
{
}
