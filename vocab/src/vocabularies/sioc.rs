//! Semantically-Interlinked Online Communities (`sioc:`).

use crate::model::iris::*;
use crate::model::MetaDecl::{Iri, Iris, Lit};
use crate::model::{TermDecl, VocabularyHeader, VocabularyModule};
use crate::registry::DuplicatePolicy;

/// Returns the `sioc:` vocabulary module.
#[must_use]
pub fn module() -> VocabularyModule {
    VocabularyModule {
        header: VocabularyHeader {
            prefix: "sioc",
            base_uri: "http://rdfs.org/sioc/ns#",
            label: "SIOC Core Ontology",
            comment: "SIOC (Semantically-Interlinked Online Communities) is an ontology for \
                      describing the information in online communities.",
            strict: true,
            duplicates: DuplicatePolicy::KeepLast,
        },
        classes: CLASSES,
        properties: PROPERTIES,
        others: &[],
    }
}

const CLASSES: &[TermDecl] = &[
    TermDecl::class("Community")
        .label("Community")
        .comment("Community is a high-level concept that defines an online community and \
                  what it consists of."),
    TermDecl::class("Container")
        .label("Container")
        .comment("An area in which content Items are contained."),
    TermDecl::class("Forum")
        .label("Forum")
        .comment("A discussion area on which Posts or entries are made.")
        .meta(&[("subClassOf", Iri("http://rdfs.org/sioc/ns#Container"))]),
    TermDecl::class("Item")
        .label("Item")
        .comment("An Item is something which can be in a Container."),
    TermDecl::class("Post")
        .label("Post")
        .comment("An article or message that can be posted to a Forum.")
        .meta(&[(
            "subClassOf",
            Iris(&["http://rdfs.org/sioc/ns#Item", FOAF_DOCUMENT]),
        )]),
    TermDecl::class("Role")
        .label("Role")
        .comment("A Role is a function of a UserAccount within a scope of a particular Forum, \
                  Site, etc."),
    TermDecl::class("Space")
        .label("Space")
        .comment("A Space is a place where data resides, e.g. on a website, desktop, fileshare, \
                  etc."),
    TermDecl::class("Site")
        .label("Site")
        .comment("A Site can be the location of an online community or set of communities, \
                  with UserAccounts and Usergroups creating Items in a set of Containers.")
        .meta(&[("subClassOf", Iri("http://rdfs.org/sioc/ns#Space"))]),
    TermDecl::class("Thread")
        .label("Thread")
        .comment("A container for a series of threaded discussion Posts or Items.")
        .meta(&[("subClassOf", Iri("http://rdfs.org/sioc/ns#Container"))]),
    TermDecl::class("UserAccount")
        .label("User Account")
        .comment("A user account in an online community site.")
        .meta(&[("subClassOf", Iri(FOAF_ONLINE_ACCOUNT))]),
    TermDecl::class("Usergroup")
        .label("Usergroup")
        .comment("A set of UserAccounts whose owners have a common purpose or interest. Can \
                  be used for access control purposes."),
    TermDecl::class("User")
        .label("User")
        .comment("UserAccount is now preferred. This is a deprecated class for a User in an \
                  online community site.")
        .meta(&[
            ("subClassOf", Iri("http://rdfs.org/sioc/ns#UserAccount")),
            ("owl:deprecated", Lit("true")),
        ]),
];

const PROPERTIES: &[TermDecl] = &[
    TermDecl::property("about")
        .label("about")
        .comment("Specifies that this Item is about a particular resource, e.g. a Post \
                  describing a book, hotel, etc.")
        .meta(&[("domain", Iri("http://rdfs.org/sioc/ns#Item"))]),
    TermDecl::property("account_of")
        .label("account of")
        .comment("Refers to the foaf:Agent or foaf:Person who owns this sioc:UserAccount.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#UserAccount")),
            ("range", Iri(FOAF_AGENT)),
            ("inverseOf", Iri("http://xmlns.com/foaf/0.1/account")),
        ]),
    TermDecl::property("administrator_of")
        .label("administrator of")
        .comment("A Site that the UserAccount is an administrator of.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#UserAccount")),
            ("range", Iri("http://rdfs.org/sioc/ns#Site")),
            ("inverseOf", Iri("http://rdfs.org/sioc/ns#has_administrator")),
        ]),
    TermDecl::property("attachment")
        .label("attachment")
        .comment("The URI of a file attached to an Item.")
        .meta(&[("domain", Iri("http://rdfs.org/sioc/ns#Item"))]),
    TermDecl::property("avatar")
        .label("avatar")
        .comment("An image or depiction used to represent this UserAccount.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#UserAccount")),
            ("subPropertyOf", Iri("http://xmlns.com/foaf/0.1/depiction")),
        ]),
    TermDecl::property("container_of")
        .label("container of")
        .comment("An Item that this Container contains.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Container")),
            ("range", Iri("http://rdfs.org/sioc/ns#Item")),
            ("inverseOf", Iri("http://rdfs.org/sioc/ns#has_container")),
        ]),
    TermDecl::property("content")
        .label("content")
        .comment("The content of the Item in plain text format.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Item")),
            ("range", Iri(RDFS_LITERAL)),
        ]),
    TermDecl::property("creator_of")
        .label("creator of")
        .comment("A resource that the UserAccount is a creator of.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#UserAccount")),
            ("inverseOf", Iri("http://rdfs.org/sioc/ns#has_creator")),
        ]),
    TermDecl::property("email")
        .label("email")
        .comment("An electronic mail address of the UserAccount.")
        .meta(&[("domain", Iri("http://rdfs.org/sioc/ns#UserAccount"))]),
    TermDecl::property("email_sha1")
        .label("email sha1")
        .comment("An electronic mail address of the UserAccount, encoded using SHA1.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#UserAccount")),
            ("range", Iri(RDFS_LITERAL)),
        ]),
    TermDecl::property("follows")
        .label("follows")
        .comment("Indicates that one UserAccount follows another UserAccount (e.g. for \
                  microblog posts or other content item updates).")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#UserAccount")),
            ("range", Iri("http://rdfs.org/sioc/ns#UserAccount")),
        ]),
    TermDecl::property("function_of")
        .label("function of")
        .comment("A UserAccount that has this Role.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Role")),
            ("inverseOf", Iri("http://rdfs.org/sioc/ns#has_function")),
        ]),
    TermDecl::property("has_administrator")
        .label("has administrator")
        .comment("A UserAccount that is an administrator of this Site.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Site")),
            ("range", Iri("http://rdfs.org/sioc/ns#UserAccount")),
        ]),
    TermDecl::property("has_container")
        .label("has container")
        .comment("The Container to which this Item belongs.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Item")),
            ("range", Iri("http://rdfs.org/sioc/ns#Container")),
        ]),
    TermDecl::property("has_creator")
        .label("has creator")
        .comment("This is the UserAccount that made this resource.")
        .meta(&[("range", Iri("http://rdfs.org/sioc/ns#UserAccount"))]),
    TermDecl::property("has_function")
        .label("has function")
        .comment("A Role that this UserAccount has.")
        .meta(&[("range", Iri("http://rdfs.org/sioc/ns#Role"))]),
    TermDecl::property("has_host")
        .label("has host")
        .comment("The Site that hosts this Container.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Container")),
            ("range", Iri("http://rdfs.org/sioc/ns#Site")),
            ("inverseOf", Iri("http://rdfs.org/sioc/ns#host_of")),
        ]),
    TermDecl::property("has_member")
        .label("has member")
        .comment("A UserAccount that is a member of this Usergroup.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Usergroup")),
            ("range", Iri("http://rdfs.org/sioc/ns#UserAccount")),
            ("inverseOf", Iri("http://rdfs.org/sioc/ns#member_of")),
        ]),
    TermDecl::property("has_moderator")
        .label("has moderator")
        .comment("A UserAccount that is a moderator of this Forum.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Forum")),
            ("range", Iri("http://rdfs.org/sioc/ns#UserAccount")),
            ("inverseOf", Iri("http://rdfs.org/sioc/ns#moderator_of")),
        ]),
    TermDecl::property("has_owner")
        .label("has owner")
        .comment("A UserAccount that this resource is owned by.")
        .meta(&[
            ("range", Iri("http://rdfs.org/sioc/ns#UserAccount")),
            ("inverseOf", Iri("http://rdfs.org/sioc/ns#owner_of")),
        ]),
    TermDecl::property("has_parent")
        .label("has parent")
        .comment("A Container or Forum that this Container or Forum is a child of.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Container")),
            ("range", Iri("http://rdfs.org/sioc/ns#Container")),
            ("inverseOf", Iri("http://rdfs.org/sioc/ns#parent_of")),
        ]),
    TermDecl::property("has_reply")
        .label("has reply")
        .comment("Points to an Item or Post that is a reply or response to this Item or Post.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Item")),
            ("range", Iri("http://rdfs.org/sioc/ns#Item")),
            ("subPropertyOf", Iri("http://rdfs.org/sioc/ns#related_to")),
            ("inverseOf", Iri("http://rdfs.org/sioc/ns#reply_of")),
        ]),
    TermDecl::property("has_space")
        .label("has space")
        .comment("A data Space which this resource is a part of.")
        .meta(&[
            ("range", Iri("http://rdfs.org/sioc/ns#Space")),
            ("inverseOf", Iri("http://rdfs.org/sioc/ns#space_of")),
        ]),
    TermDecl::property("has_subscriber")
        .label("has subscriber")
        .comment("A UserAccount that is subscribed to this Container.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Container")),
            ("range", Iri("http://rdfs.org/sioc/ns#UserAccount")),
            ("inverseOf", Iri("http://rdfs.org/sioc/ns#subscriber_of")),
        ]),
    TermDecl::property("host_of")
        .label("host of")
        .comment("A Container that is hosted on this Site.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Site")),
            ("range", Iri("http://rdfs.org/sioc/ns#Container")),
        ]),
    TermDecl::property("id")
        .label("id")
        .comment("An identifier of a SIOC concept instance. For example, a user ID. Must be \
                  unique for instances of each type of SIOC concept within the same site.")
        .meta(&[("range", Iri(RDFS_LITERAL))]),
    TermDecl::property("ip_address")
        .label("ip address")
        .comment("The IP address used when creating this Item, UserAccount, etc.")
        .meta(&[("range", Iri(RDFS_LITERAL))]),
    TermDecl::property("last_activity_date")
        .label("last activity date")
        .comment("The date and time of the last activity associated with a SIOC concept \
                  instance.")
        .meta(&[("range", Iri(RDFS_LITERAL))]),
    TermDecl::property("last_reply_date")
        .label("last reply date")
        .comment("The date and time of the last reply Post or Comment.")
        .meta(&[
            ("range", Iri(RDFS_LITERAL)),
            ("subPropertyOf", Iri("http://rdfs.org/sioc/ns#last_activity_date")),
        ]),
    TermDecl::property("link")
        .label("link")
        .comment("A URI of a document which contains this SIOC object."),
    TermDecl::property("links_to")
        .label("links to")
        .comment("Links extracted from hyperlinks within a SIOC concept, e.g. Post or Site.")
        .meta(&[("subPropertyOf", Iri("http://www.w3.org/2000/01/rdf-schema#seeAlso"))]),
    TermDecl::property("member_of")
        .label("member of")
        .comment("A Usergroup that this UserAccount is a member of.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#UserAccount")),
            ("range", Iri("http://rdfs.org/sioc/ns#Usergroup")),
        ]),
    TermDecl::property("moderator_of")
        .label("moderator of")
        .comment("A Forum that UserAccount is a moderator of.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#UserAccount")),
            ("range", Iri("http://rdfs.org/sioc/ns#Forum")),
        ]),
    TermDecl::property("name")
        .label("name")
        .comment("The name of a SIOC concept instance, e.g. a username for a UserAccount, \
                  group name for a Usergroup, etc.")
        .meta(&[("range", Iri(RDFS_LITERAL))]),
    TermDecl::property("num_authors")
        .label("num authors")
        .comment("The number of unique authors (UserAccounts and unregistered posters) who \
                  have contributed to this Item, Thread, Post, etc.")
        .meta(&[("range", Iri(XSD_NON_NEGATIVE_INTEGER))]),
    TermDecl::property("num_items")
        .label("num items")
        .comment("The number of Posts (or Items) in a Forum (or a Container).")
        .meta(&[("range", Iri(XSD_NON_NEGATIVE_INTEGER))]),
    TermDecl::property("num_replies")
        .label("num replies")
        .comment("The number of replies that this Item, Thread, Post, etc. has. Useful for \
                  when the reply structure is absent.")
        .meta(&[("range", Iri(XSD_NON_NEGATIVE_INTEGER))]),
    TermDecl::property("num_threads")
        .label("num threads")
        .comment("The number of Threads (AKA discussion topics) in a Forum.")
        .meta(&[("range", Iri(XSD_NON_NEGATIVE_INTEGER))]),
    TermDecl::property("num_views")
        .label("num views")
        .comment("The number of times this Item, Thread, UserAccount profile, etc. has been \
                  viewed.")
        .meta(&[("range", Iri(XSD_NON_NEGATIVE_INTEGER))]),
    TermDecl::property("owner_of")
        .label("owner of")
        .comment("A resource owned by a particular UserAccount, for example, a weblog or \
                  image gallery.")
        .meta(&[("domain", Iri("http://rdfs.org/sioc/ns#UserAccount"))]),
    TermDecl::property("parent_of")
        .label("parent of")
        .comment("A child Container or Forum that this Container or Forum is a parent of.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Container")),
            ("range", Iri("http://rdfs.org/sioc/ns#Container")),
        ]),
    TermDecl::property("previous_version")
        .label("previous version")
        .comment("Links to a previous (older) revision of this Item or Post.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Item")),
            ("range", Iri("http://rdfs.org/sioc/ns#Item")),
            ("inverseOf", Iri("http://rdfs.org/sioc/ns#next_version")),
        ]),
    TermDecl::property("next_version")
        .label("next version")
        .comment("Links the Item or Post to the next revision of the current Item or Post.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Item")),
            ("range", Iri("http://rdfs.org/sioc/ns#Item")),
        ]),
    TermDecl::property("related_to")
        .label("related to")
        .comment("Related resources for this resource, e.g. for Posts, perhaps determined \
                  implicitly from topics or references."),
    TermDecl::property("reply_of")
        .label("reply of")
        .comment("Links to an Item or Post which this Item or Post is a reply to.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Item")),
            ("range", Iri("http://rdfs.org/sioc/ns#Item")),
            ("subPropertyOf", Iri("http://rdfs.org/sioc/ns#related_to")),
        ]),
    TermDecl::property("scope_of")
        .label("scope of")
        .comment("A Role that has a scope of this resource.")
        .meta(&[
            ("range", Iri("http://rdfs.org/sioc/ns#Role")),
            ("inverseOf", Iri("http://rdfs.org/sioc/ns#has_scope")),
        ]),
    TermDecl::property("has_scope")
        .label("has scope")
        .comment("A resource that this Role applies to.")
        .meta(&[("domain", Iri("http://rdfs.org/sioc/ns#Role"))]),
    TermDecl::property("space_of")
        .label("space of")
        .comment("A resource which belongs to this data Space.")
        .meta(&[("domain", Iri("http://rdfs.org/sioc/ns#Space"))]),
    TermDecl::property("subscriber_of")
        .label("subscriber of")
        .comment("A Container that a UserAccount is subscribed to.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#UserAccount")),
            ("range", Iri("http://rdfs.org/sioc/ns#Container")),
        ]),
    TermDecl::property("topic")
        .label("topic")
        .comment("A topic of interest, linking to the appropriate URI, e.g. in the Open \
                  Directory Project or of a SKOS category.")
        .meta(&[("subPropertyOf", Iri("http://purl.org/dc/terms/subject"))]),
    TermDecl::property("usergroup_of")
        .label("usergroup of")
        .comment("A Space that the Usergroup has access to.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Usergroup")),
            ("range", Iri("http://rdfs.org/sioc/ns#Space")),
            ("inverseOf", Iri("http://rdfs.org/sioc/ns#has_usergroup")),
        ]),
    TermDecl::property("has_usergroup")
        .label("has usergroup")
        .comment("Points to a Usergroup that has certain access to this Space.")
        .meta(&[
            ("domain", Iri("http://rdfs.org/sioc/ns#Space")),
            ("range", Iri("http://rdfs.org/sioc/ns#Usergroup")),
        ]),
    TermDecl::property("has_group")
        .label("has group")
        .comment("This property has been renamed. Use sioc:usergroup_of instead.")
        .meta(&[
            ("range", Iri("http://rdfs.org/sioc/ns#Usergroup")),
            ("owl:deprecated", Lit("true")),
        ]),
];
