//! Recording fakes for the handler ports.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use pocketbot::BotError;
use pocketbot::SyncScope;
use pocketbot::error::Result;
use pocketbot::ports::{
    ChannelMessages, CommandRegistrar, GuildDirectory, GuildSummary, MessagePurger, Responder,
};
use pocketbot::reply::Reply;
use serenity::model::id::{GuildId, MessageId};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Reply(Reply),
    Defer { ephemeral: bool },
    Followup(Reply),
}

#[derive(Default)]
pub struct FakeResponder {
    pub sent: Mutex<Vec<Sent>>,
    /// Behave like an interaction that was already acknowledged.
    pub acknowledged: bool,
}

impl FakeResponder {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// The single user-visible message, whether sent directly or as a follow-up.
    pub fn only_message(&self) -> Reply {
        let messages: Vec<Reply> = self
            .sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Reply(r) | Sent::Followup(r) => Some(r),
                Sent::Defer { .. } => None,
            })
            .collect();
        assert_eq!(messages.len(), 1, "expected exactly one message, got {messages:?}");
        messages.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Responder for FakeResponder {
    async fn reply(&self, reply: Reply) -> Result<()> {
        if self.acknowledged {
            return Err(BotError::Discord(serenity::Error::Other("already acknowledged")));
        }
        self.sent.lock().unwrap().push(Sent::Reply(reply));
        Ok(())
    }

    async fn defer(&self, ephemeral: bool) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Defer { ephemeral });
        Ok(())
    }

    async fn followup(&self, reply: Reply) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Followup(reply));
        Ok(())
    }
}

pub struct FakeRegistrar {
    pub calls: Mutex<Vec<SyncScope>>,
    pub names: Vec<String>,
    pub fail: bool,
}

impl FakeRegistrar {
    pub fn returning(names: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            names: names.iter().map(|n| n.to_string()).collect(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            names: Vec::new(),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<SyncScope> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRegistrar for FakeRegistrar {
    async fn sync(&self, scope: SyncScope) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push(scope);
        if self.fail {
            return Err(BotError::Discord(serenity::Error::Other("registration rejected")));
        }
        Ok(self.names.clone())
    }
}

pub struct FakePurger {
    pub calls: Mutex<Vec<u8>>,
    /// Caps the reported deletions, like a channel with fewer deletable messages.
    pub available: usize,
}

impl FakePurger {
    pub fn with_available(available: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            available,
        }
    }

    pub fn calls(&self) -> Vec<u8> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagePurger for FakePurger {
    async fn purge(&self, limit: u8) -> Result<usize> {
        self.calls.lock().unwrap().push(limit);
        Ok(usize::from(limit).min(self.available))
    }
}

#[derive(Default)]
pub struct FakeDirectory {
    pub lookups: Mutex<Vec<GuildId>>,
    pub fail: bool,
}

impl FakeDirectory {
    pub fn lookups(&self) -> Vec<GuildId> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl GuildDirectory for FakeDirectory {
    async fn summary(&self, guild_id: GuildId) -> Result<GuildSummary> {
        self.lookups.lock().unwrap().push(guild_id);
        if self.fail {
            return Err(BotError::Discord(serenity::Error::Other("unknown guild")));
        }
        Ok(GuildSummary {
            name: "Tea House".to_string(),
            id: guild_id,
            member_count: 42,
            created_at: Utc.with_ymd_and_hms(2020, 5, 17, 9, 30, 0).unwrap(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletion {
    Bulk(Vec<MessageId>),
    One(MessageId),
}

/// A channel holding `(id, created_at)` messages, newest first.
#[derive(Default)]
pub struct FakeChannel {
    pub messages: Vec<(MessageId, i64)>,
    pub reject_bulk: bool,
    /// Single deletes of these ids fail.
    pub undeletable: Vec<MessageId>,
    pub deletions: Mutex<Vec<Deletion>>,
}

impl FakeChannel {
    pub fn deletions(&self) -> Vec<Deletion> {
        self.deletions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChannelMessages for FakeChannel {
    async fn recent(&self, limit: u8) -> Result<Vec<(MessageId, i64)>> {
        Ok(self.messages.iter().copied().take(usize::from(limit)).collect())
    }

    async fn delete_bulk(&self, ids: &[MessageId]) -> Result<()> {
        if self.reject_bulk {
            return Err(BotError::Discord(serenity::Error::Other("message too old")));
        }
        self.deletions.lock().unwrap().push(Deletion::Bulk(ids.to_vec()));
        Ok(())
    }

    async fn delete_one(&self, id: MessageId) -> Result<()> {
        if self.undeletable.contains(&id) {
            return Err(BotError::Discord(serenity::Error::Other("unknown message")));
        }
        self.deletions.lock().unwrap().push(Deletion::One(id));
        Ok(())
    }
}
