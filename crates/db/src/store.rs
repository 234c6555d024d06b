//! In-process relational store.
//!
//! Collections are `BTreeMap`s keyed by id so iteration order is
//! deterministic. Derived fields are enforced here: saving a contract
//! recomputes its end date and saving a payout recomputes its total,
//! whatever the caller put in those fields. Deleting a contract
//! cascades to its payouts, deleting a proposal to its payments.
//!
//! [`HrStore::transaction`] gives the all-or-nothing guarantee the
//! workflow needs: the closure runs against the live store and any
//! error restores the pre-transaction snapshot. Access is serialized
//! by `&mut` -- there is no concurrent writer to race against.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use corehr_core::capability::{Capability, ModelKind};
use corehr_core::dates::contract_end_date;
use corehr_core::error::{CoreError, CoreResult};
use corehr_core::payout::payout_total;
use corehr_core::status::ProposalStatus;
use corehr_core::types::{AuthGroupId, DbId, GroupId, PersonId, UserId};
use corehr_core::validation::{validate_nif, validate_person_identification};

use crate::models::{
    AuthGroup, Contract, ContractProposal, GroupMembership, NewContract, NewPayment, NewPayout,
    NewProposal, Payment, Payout, Person, PrivateInfo, RankedPermission, ResearchGroup, User,
    PROFILE_HUMAN_RESOURCES,
};

#[derive(Debug, Clone, Default)]
pub struct HrStore {
    next_id: DbId,
    users: BTreeMap<UserId, User>,
    persons: BTreeMap<PersonId, Person>,
    research_groups: BTreeMap<GroupId, ResearchGroup>,
    memberships: Vec<GroupMembership>,
    auth_groups: BTreeMap<AuthGroupId, AuthGroup>,
    permissions: BTreeMap<DbId, RankedPermission>,
    contracts: BTreeMap<DbId, Contract>,
    proposals: BTreeMap<DbId, ContractProposal>,
    payments: BTreeMap<DbId, Payment>,
    payouts: BTreeMap<DbId, Payout>,
    private_infos: BTreeMap<DbId, PrivateInfo>,
}

impl HrStore {
    pub fn new() -> Self {
        HrStore {
            next_id: 1,
            ..Default::default()
        }
    }

    fn alloc_id(&mut self) -> DbId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Run `f` atomically: on error every write it made is rolled back.
    pub fn transaction<T>(
        &mut self,
        f: impl FnOnce(&mut HrStore) -> CoreResult<T>,
    ) -> CoreResult<T> {
        let snapshot = self.clone();
        match f(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                *self = snapshot;
                Err(err)
            }
        }
    }

    // -----------------------------------------------------------------
    // People, groups, accounts
    // -----------------------------------------------------------------

    pub fn create_person(&mut self, full_name: &str, email: Option<&str>) -> PersonId {
        let id = self.alloc_id();
        self.persons.insert(
            id,
            Person {
                id,
                full_name: full_name.to_string(),
                email: email.map(str::to_string),
                active: true,
            },
        );
        id
    }

    pub fn get_person(&self, id: PersonId) -> CoreResult<&Person> {
        self.persons
            .get(&id)
            .ok_or(CoreError::NotFound { entity: "Person", id })
    }

    pub fn create_user(
        &mut self,
        username: &str,
        email: Option<&str>,
        person: Option<PersonId>,
        is_superuser: bool,
    ) -> UserId {
        let id = self.alloc_id();
        self.users.insert(
            id,
            User {
                id,
                username: username.to_string(),
                email: email.map(str::to_string),
                person,
                is_superuser,
                auth_groups: Vec::new(),
            },
        );
        id
    }

    pub fn get_user(&self, id: UserId) -> CoreResult<&User> {
        self.users
            .get(&id)
            .ok_or(CoreError::NotFound { entity: "User", id })
    }

    /// The account linked to a person, if any.
    pub fn user_of_person(&self, person: PersonId) -> Option<&User> {
        self.users.values().find(|u| u.person == Some(person))
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn create_research_group(&mut self, name: &str) -> GroupId {
        let id = self.alloc_id();
        self.research_groups.insert(
            id,
            ResearchGroup {
                id,
                name: name.to_string(),
            },
        );
        id
    }

    pub fn create_auth_group(&mut self, name: &str) -> AuthGroupId {
        let id = self.alloc_id();
        self.auth_groups.insert(
            id,
            AuthGroup {
                id,
                name: name.to_string(),
            },
        );
        id
    }

    pub fn add_user_to_auth_group(&mut self, user: UserId, group: AuthGroupId) -> CoreResult<()> {
        let user = self
            .users
            .get_mut(&user)
            .ok_or(CoreError::NotFound { entity: "User", id: user })?;
        if !user.auth_groups.contains(&group) {
            user.auth_groups.push(group);
        }
        Ok(())
    }

    pub fn add_membership(
        &mut self,
        person: PersonId,
        group: GroupId,
        date_joined: Option<NaiveDate>,
        date_left: Option<NaiveDate>,
    ) {
        self.memberships.push(GroupMembership {
            person,
            group,
            date_joined,
            date_left,
        });
    }

    pub fn memberships(&self) -> impl Iterator<Item = &GroupMembership> {
        self.memberships.iter()
    }

    pub fn memberships_of(&self, person: PersonId) -> impl Iterator<Item = &GroupMembership> {
        self.memberships.iter().filter(move |m| m.person == person)
    }

    /// Emails of the members of the HR profile group, the recipient
    /// list for proposal notifications.
    pub fn hr_staff_emails(&self) -> Vec<String> {
        let Some(group) = self
            .auth_groups
            .values()
            .find(|g| g.name == PROFILE_HUMAN_RESOURCES)
        else {
            return Vec::new();
        };
        self.users
            .values()
            .filter(|u| u.auth_groups.contains(&group.id))
            .filter_map(|u| u.email.clone())
            .collect()
    }

    // -----------------------------------------------------------------
    // Ranked permissions
    // -----------------------------------------------------------------

    pub fn grant_permission(
        &mut self,
        auth_group: AuthGroupId,
        model: ModelKind,
        research_group: Option<GroupId>,
        ranking: i32,
        capabilities: &[Capability],
    ) -> DbId {
        let id = self.alloc_id();
        self.permissions.insert(
            id,
            RankedPermission {
                id,
                auth_group,
                model,
                research_group,
                ranking,
                capabilities: capabilities.to_vec(),
            },
        );
        id
    }

    pub fn permissions(&self) -> impl Iterator<Item = &RankedPermission> {
        self.permissions.values()
    }

    // -----------------------------------------------------------------
    // Contracts and payouts
    // -----------------------------------------------------------------

    pub fn create_contract(&mut self, new: NewContract) -> DbId {
        let id = self.alloc_id();
        let end = contract_end_date(new.start, new.months_duration, new.days_duration);
        self.contracts.insert(
            id,
            Contract {
                id,
                person: new.person,
                start: new.start,
                months_duration: new.months_duration,
                days_duration: new.days_duration,
                end,
                salary: new.salary,
                description: new.description,
                social_security: None,
                social_security_paid: None,
                social_security_start: None,
                social_security_end: None,
                fellowship_ref: None,
                contract_ref: None,
                fellowship_type: new.fellowship_type,
                position: new.position,
                financing: None,
                supervisor: new.supervisor,
                notes: String::new(),
                warning_email: true,
            },
        );
        id
    }

    pub fn get_contract(&self, id: DbId) -> CoreResult<&Contract> {
        self.contracts
            .get(&id)
            .ok_or(CoreError::NotFound { entity: "Contract", id })
    }

    /// Persist an updated contract. The end date is rederived from the
    /// start and duration; whatever the caller left in `end` is
    /// discarded.
    pub fn save_contract(&mut self, mut contract: Contract) -> CoreResult<()> {
        if !self.contracts.contains_key(&contract.id) {
            return Err(CoreError::NotFound {
                entity: "Contract",
                id: contract.id,
            });
        }
        contract.end = contract_end_date(
            contract.start,
            contract.months_duration,
            contract.days_duration,
        );
        self.contracts.insert(contract.id, contract);
        Ok(())
    }

    /// Delete a contract and, cascading, all its payouts.
    pub fn delete_contract(&mut self, id: DbId) -> CoreResult<()> {
        if self.contracts.remove(&id).is_none() {
            return Err(CoreError::NotFound { entity: "Contract", id });
        }
        self.payouts.retain(|_, p| p.contract != id);
        Ok(())
    }

    pub fn contracts(&self) -> impl Iterator<Item = &Contract> {
        self.contracts.values()
    }

    pub fn create_payout(&mut self, new: NewPayout) -> CoreResult<DbId> {
        self.get_contract(new.contract)?;
        let id = self.alloc_id();
        let total = payout_total(new.start, new.end, new.amount);
        self.payouts.insert(
            id,
            Payout {
                id,
                contract: new.contract,
                project: new.project,
                start: new.start,
                end: new.end,
                amount: new.amount,
                total,
            },
        );
        Ok(id)
    }

    pub fn get_payout(&self, id: DbId) -> CoreResult<&Payout> {
        self.payouts
            .get(&id)
            .ok_or(CoreError::NotFound { entity: "Payout", id })
    }

    /// Persist an updated payout, rederiving its cached total.
    pub fn save_payout(&mut self, mut payout: Payout) -> CoreResult<()> {
        if !self.payouts.contains_key(&payout.id) {
            return Err(CoreError::NotFound {
                entity: "Payout",
                id: payout.id,
            });
        }
        payout.total = payout.total_amount();
        self.payouts.insert(payout.id, payout);
        Ok(())
    }

    pub fn payouts(&self) -> impl Iterator<Item = &Payout> {
        self.payouts.values()
    }

    pub fn payouts_of_contract(&self, contract: DbId) -> impl Iterator<Item = &Payout> {
        self.payouts.values().filter(move |p| p.contract == contract)
    }

    // -----------------------------------------------------------------
    // Proposals and payments
    // -----------------------------------------------------------------

    /// Raw proposal insert used by the workflow layer; payment
    /// validation and notification live there. The exactly-one
    /// identification rule (person or free-text name) is enforced here,
    /// at the storage layer, not just in the workflow.
    pub fn create_proposal(&mut self, new: NewProposal, today: NaiveDate) -> CoreResult<DbId> {
        validate_person_identification(new.person, new.person_name.as_deref())?;
        let id = self.alloc_id();
        self.proposals.insert(
            id,
            ContractProposal {
                id,
                motive: new.motive,
                status: ProposalStatus::Pending,
                created_on: today,
                start: new.start,
                months_duration: new.months_duration,
                days_duration: new.days_duration,
                salary: new.salary,
                description: new.description,
                person: new.person,
                person_name: new.person_name,
                person_email: new.person_email,
                fellowship_type: new.fellowship_type,
                position: new.position,
                responsible: new.responsible,
                supervisor: new.supervisor,
                closed_on: None,
                closed_by: None,
                contract: None,
            },
        );
        Ok(id)
    }

    pub fn get_proposal(&self, id: DbId) -> CoreResult<&ContractProposal> {
        self.proposals.get(&id).ok_or(CoreError::NotFound {
            entity: "ContractProposal",
            id,
        })
    }

    /// Persist an updated proposal. `created_on` is immutable and kept
    /// from the stored row.
    pub fn save_proposal(&mut self, mut proposal: ContractProposal) -> CoreResult<()> {
        validate_person_identification(proposal.person, proposal.person_name.as_deref())?;
        let existing = self.get_proposal(proposal.id)?;
        proposal.created_on = existing.created_on;
        self.proposals.insert(proposal.id, proposal);
        Ok(())
    }

    /// Delete a proposal and, cascading, all its payments.
    pub fn delete_proposal(&mut self, id: DbId) -> CoreResult<()> {
        if self.proposals.remove(&id).is_none() {
            return Err(CoreError::NotFound {
                entity: "ContractProposal",
                id,
            });
        }
        self.payments.retain(|_, p| p.proposal != id);
        Ok(())
    }

    pub fn proposals(&self) -> impl Iterator<Item = &ContractProposal> {
        self.proposals.values()
    }

    pub fn create_payment(&mut self, proposal: DbId, new: NewPayment) -> CoreResult<DbId> {
        self.get_proposal(proposal)?;
        let id = self.alloc_id();
        self.payments.insert(
            id,
            Payment {
                id,
                proposal,
                project: new.project,
                amount: new.amount,
                n_months: new.n_months,
            },
        );
        Ok(id)
    }

    pub fn payments_of_proposal(&self, proposal: DbId) -> impl Iterator<Item = &Payment> {
        self.payments.values().filter(move |p| p.proposal == proposal)
    }

    // -----------------------------------------------------------------
    // Private info
    // -----------------------------------------------------------------

    /// Insert or replace the one private-info record of a person.
    pub fn save_private_info(&mut self, mut info: PrivateInfo) -> CoreResult<DbId> {
        if let Some(nif) = &info.nif {
            validate_nif(nif)?;
        }
        self.get_person(info.person)?;
        if let Some(existing) = self
            .private_infos
            .values()
            .find(|i| i.person == info.person)
        {
            info.id = existing.id;
        } else if info.id == 0 {
            info.id = self.alloc_id();
        }
        let id = info.id;
        self.private_infos.insert(id, info);
        Ok(id)
    }

    pub fn get_private_info(&self, id: DbId) -> CoreResult<&PrivateInfo> {
        self.private_infos.get(&id).ok_or(CoreError::NotFound {
            entity: "PrivateInfo",
            id,
        })
    }

    pub fn private_infos(&self) -> impl Iterator<Item = &PrivateInfo> {
        self.private_infos.values()
    }
}
