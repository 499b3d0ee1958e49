mod common;
pub use self::common::{
    default_response_key, format_time, Currency, Endpoint, FileItem, HttpMethod, Language,
    LinkType, OrderStatus, ProductType, SortBy, TIME_FORMAT,
};

mod affiliate;
pub use self::affiliate::{
    CategoryGet, HotProductQuery, LinkGenerate, OrderList, ProductDetailGet, ProductFilter,
    ProductQuery, SmartMatch,
};

mod logistics;
pub use self::logistics::{BuyerFreightCalculate, FreightProduct};

mod dropshipping;
pub use self::dropshipping::{
    DropshipperAdd, DsCategoryGet, DsCommissionOrderList, DsFeedItemIdsGet, DsFreightQuery,
    DsImageSearch, DsMemberBenefitGet, DsOrderCreate, DsOrderList, DsOrderTrackingGet,
    DsProductGet, DsProductSpecialInfoGet, DsRecommendFeedGet, DsSearchEventReport,
    DsTextSearch, DsTradeOrderGet, DsWholesaleProductGet, FreightQuery, LogisticsAddress,
    ProductItem, SearchEvent, TradeDsOrderGet,
};
